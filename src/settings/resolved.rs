use std::io::Write;
use std::path::PathBuf;

use modsift::{Ordering, Theme};

/// Application-ready configuration derived from user input, config files
/// and defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) catalog: Option<PathBuf>,
    pub(crate) new_mods_query: String,
    pub(crate) new_mods: Vec<String>,
    pub(crate) ordering: Ordering,
    pub(crate) theme: Theme,
    pub(crate) highlight_color: Option<String>,
    pub(crate) log_filter: String,
}

impl ResolvedConfig {
    /// Write a human readable summary of the effective configuration.
    pub(crate) fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "Effective configuration:")?;
        match &self.catalog {
            Some(path) => writeln!(out, "  Catalog: {}", path.display())?,
            None => writeln!(out, "  Catalog: (none)")?,
        }
        writeln!(out, "  New mods query: {}", self.new_mods_query)?;
        if self.new_mods.is_empty() {
            writeln!(out, "  Extra new mods: (none)")?;
        } else {
            writeln!(out, "  Extra new mods: {}", self.new_mods.join(", "))?;
        }
        writeln!(out, "  Ordering: {}", self.ordering)?;
        writeln!(
            out,
            "  Highlight colour: {}",
            self.highlight_color.as_deref().unwrap_or("(default)")
        )?;
        writeln!(out, "  Log filter: {}", self.log_filter)
    }
}
