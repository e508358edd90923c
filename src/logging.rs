//! Stderr logging built on `tracing-subscriber`.
//!
//! `MODSIFT_LOG` takes precedence over the filter passed to [`initialize`],
//! using the usual `EnvFilter` directive syntax (`debug`,
//! `modsift::adapter=trace`, ...).

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable consulted for log directives.
pub const LOG_ENV: &str = "MODSIFT_LOG";

/// Directive used when neither the environment nor the settings name one.
pub const DEFAULT_FILTER: &str = "warn";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn initialize(default_filter: Option<&str>) {
    INITIALIZED.get_or_init(|| {
        let filter = build_filter(default_filter);
        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
        if let Err(err) = result {
            eprintln!("modsift: logging already initialised elsewhere: {err}");
        }
    });
}

fn build_filter(default_filter: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
