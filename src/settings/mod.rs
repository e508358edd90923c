//! Configuration loading and resolution.
//!
//! `load` is the entry point and returns the [`ResolvedConfig`] the
//! workflow is built from.

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
pub(crate) use sources::SettingSource;
