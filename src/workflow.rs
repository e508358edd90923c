use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use modsift::{ModCatalog, ModSearchAdapter, RowView};
use tracing::info;

use crate::cli::{OutputFormat, write_json, write_plain, write_styled};
use crate::settings::ResolvedConfig;

/// How long to wait for the worker to publish a submitted query.
const PUBLISH_TIMEOUT: Duration = Duration::from_secs(5);

/// Drives a [`ModSearchAdapter`] from CLI input and prints its rows.
pub(crate) struct ListWorkflow {
    adapter: ModSearchAdapter,
    format: OutputFormat,
    color: bool,
}

impl ListWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig, format: OutputFormat) -> Result<Self> {
        let ResolvedConfig {
            catalog,
            new_mods_query,
            new_mods,
            ordering,
            theme,
            ..
        } = config;

        let Some(path) = catalog else {
            bail!("no catalog given; pass --catalog or set catalog.path");
        };
        let catalog = ModCatalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?
            .with_new_mods(new_mods)
            .with_new_mods_query(new_mods_query);
        info!(path = %path.display(), entries = catalog.len(), "catalog loaded");

        let adapter = ModSearchAdapter::new(Some(Arc::new(catalog)))
            .with_ordering(ordering)
            .with_theme(theme);
        Ok(Self {
            adapter,
            format,
            color: false,
        })
    }

    /// Draw plain output with the adapter's theme instead of brackets.
    pub(crate) fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Apply one query and print the resulting rows.
    pub(crate) fn run_query(&mut self, query: &str, out: &mut impl Write) -> Result<()> {
        self.adapter.apply_query(query);
        self.print(query, out)
    }

    /// Treat every input line as a query change and print rows after each.
    ///
    /// Lines go through the background worker, so a slow query is
    /// superseded by the next line instead of being printed late.
    pub(crate) fn run_lines(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            let query = line.context("failed to read query from input")?;
            self.adapter.submit_query(query.as_str());
            if !self.adapter.wait_for_results(PUBLISH_TIMEOUT) {
                bail!("timed out filtering for '{query}'");
            }
            self.print(&query, out)?;
            out.flush()?;
        }
        Ok(())
    }

    fn print(&self, query: &str, out: &mut impl Write) -> Result<()> {
        let rows: Vec<RowView> = self.adapter.rows();
        match self.format {
            OutputFormat::Plain if self.color => {
                write_styled(out, query, &rows, self.adapter.theme())
            }
            OutputFormat::Plain => write_plain(out, query, &rows),
            OutputFormat::Json => write_json(out, query, &rows),
        }
    }
}
