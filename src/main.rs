mod cli;
mod settings;
mod workflow;

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use cli::parse_cli;
use ratatui::crossterm::tty::IsTty;
use workflow::ListWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;
    modsift::logging::initialize(Some(&resolved.log_filter));
    tracing::debug!(?resolved, "configuration resolved");

    let stdout = io::stdout();
    let color = cli.color.enabled(stdout.is_tty());
    let mut out = BufWriter::new(stdout.lock());

    if cli.print_config {
        resolved.write_summary(&mut out)?;
    }

    let mut workflow = ListWorkflow::from_config(resolved, cli.output)?.with_color(color);
    if cli.stdin {
        workflow.run_lines(io::stdin().lock(), &mut out)?;
    } else {
        workflow.run_query(cli.query.as_deref().unwrap_or_default(), &mut out)?;
    }

    out.flush()?;
    Ok(())
}
