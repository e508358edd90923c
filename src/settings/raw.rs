use std::path::PathBuf;

use serde::Deserialize;

use modsift::{DEFAULT_NEW_MODS_QUERY, Ordering, Theme, logging};

use crate::cli::CliArgs;

use super::errors::SettingsError;
use super::resolved::ResolvedConfig;
use super::sources::SettingSource;

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    catalog: CatalogSection,
    search: SearchSection,
    ui: UiSection,
    logging: LoggingSection,
    #[serde(skip)]
    sources: RawSources,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    new_mods_query: Option<String>,
    new_mods: Option<Vec<String>>,
    ordering: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    highlight_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
    filter: Option<String>,
}

/// Which settings were last set by a CLI flag.
#[derive(Debug, Clone, Default)]
struct RawSources {
    ordering: Option<SettingSource>,
    highlight_color: Option<SettingSource>,
    new_mods_query: Option<SettingSource>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.catalog.clone() {
            self.catalog.path = Some(path);
        }
        if let Some(query) = cli.new_mods_query.clone() {
            self.search.new_mods_query = Some(query);
            self.sources.new_mods_query = Some(SettingSource::CliFlag("--new-mods-query"));
        }
        if let Some(keys) = &cli.new_mods {
            self.search
                .new_mods
                .get_or_insert_with(Vec::new)
                .extend(keys.iter().cloned());
        }
        if let Some(ordering) = cli.ordering {
            self.search.ordering = Some(Ordering::from(ordering).as_str().to_string());
            self.sources.ordering = Some(SettingSource::CliFlag("--ordering"));
        }
        if let Some(color) = cli.highlight_color.clone() {
            self.ui.highlight_color = Some(color);
            self.sources.highlight_color = Some(SettingSource::CliFlag("--highlight-color"));
        }
        if let Some(filter) = cli.log.clone() {
            self.logging.filter = Some(filter);
        }
    }

    /// Validate the merged values and produce the application configuration.
    pub(super) fn resolve(self) -> Result<ResolvedConfig, SettingsError> {
        let RawConfig {
            catalog,
            search,
            ui,
            logging: logging_section,
            sources,
        } = self;

        let ordering = match search.ordering {
            Some(value) => value.parse::<Ordering>().map_err(|reason| {
                SettingsError::invalid(
                    "search.ordering",
                    value.clone(),
                    sources
                        .ordering
                        .clone()
                        .unwrap_or(SettingSource::ConfigKey("search.ordering")),
                    reason,
                )
            })?,
            None => Ordering::default(),
        };

        let (theme, highlight_color) = match ui.highlight_color {
            Some(name) => {
                let theme = Theme::from_color_name(&name).ok_or_else(|| {
                    SettingsError::invalid(
                        "ui.highlight_color",
                        name.clone(),
                        sources
                            .highlight_color
                            .clone()
                            .unwrap_or(SettingSource::ConfigKey("ui.highlight_color")),
                        "expected a colour name or #rrggbb",
                    )
                })?;
                (theme, Some(name))
            }
            None => (Theme::default(), None),
        };

        let new_mods_query = search
            .new_mods_query
            .unwrap_or_else(|| DEFAULT_NEW_MODS_QUERY.to_string());
        if new_mods_query.is_empty() {
            return Err(SettingsError::invalid(
                "search.new_mods_query",
                new_mods_query,
                sources
                    .new_mods_query
                    .unwrap_or(SettingSource::ConfigKey("search.new_mods_query")),
                "must not be empty",
            ));
        }

        let new_mods = search
            .new_mods
            .unwrap_or_default()
            .into_iter()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect();

        Ok(ResolvedConfig {
            catalog: catalog.path,
            new_mods_query,
            new_mods,
            ordering,
            theme,
            highlight_color,
            log_filter: logging_section
                .filter
                .unwrap_or_else(|| logging::DEFAULT_FILTER.to_string()),
        })
    }
}
