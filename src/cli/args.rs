use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use modsift::{Ordering, app_dirs};

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("modsift {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
    CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
    name = "modsift",
    version,
    long_version = long_version(),
    about = "Filter, rank and highlight a catalog of mods",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `modsift` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "MODSIFT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON catalog of mods to search (default: catalog.path setting)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        conflicts_with = "stdin",
        help = "Apply a single query and print the rows (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long,
        help = "Read one query per line from stdin, printing rows after each (default: disabled)"
    )]
    pub(crate) stdin: bool,
    #[arg(
        long,
        value_enum,
        help = "Ordering applied to matches (default: frequency)"
    )]
    pub(crate) ordering: Option<OrderingArg>,
    #[arg(
        long = "new-mods-query",
        value_name = "TEXT",
        help = "Query that lists the curated new mods (default: @new)"
    )]
    pub(crate) new_mods_query: Option<String>,
    #[arg(
        long = "new-mods",
        value_name = "KEY",
        value_delimiter = ',',
        help = "Comma separated keys added to the curated new mods (default: none)"
    )]
    pub(crate) new_mods: Option<Vec<String>>,
    #[arg(
        long = "highlight-color",
        value_name = "COLOR",
        help = "Colour for matched characters, a name or #rrggbb (default: yellow)"
    )]
    pub(crate) highlight_color: Option<String>,
    #[arg(
        long = "log",
        value_name = "DIRECTIVES",
        help = "Log filter directives, overridden by MODSIFT_LOG (default: warn)"
    )]
    pub(crate) log: Option<String>,
    #[arg(
        long = "print-config",
        help = "Print the effective configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the rows"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "color",
        value_enum,
        default_value_t = ColorMode::Auto,
        help = "Draw plain output in the highlight colours; auto styles only a terminal"
    )]
    pub(crate) color: ColorMode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Orderings selectable from the CLI.
pub(crate) enum OrderingArg {
    Frequency,
    Breadcrumb,
}

impl From<OrderingArg> for Ordering {
    fn from(value: OrderingArg) -> Self {
        match value {
            OrderingArg::Frequency => Ordering::Frequency,
            OrderingArg::Breadcrumb => Ordering::Breadcrumb,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// When plain output carries terminal colours.
pub(crate) enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub(crate) fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut matches = cli_command().get_matches_from(args);
        CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
    }

    #[test]
    fn command_has_about_text() {
        assert!(cli_command().get_about().is_some());
    }

    #[test]
    fn defaults_to_plain_output() {
        let parsed = parse(&["modsift"]);
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert_eq!(parsed.color, ColorMode::Auto);
        assert!(parsed.query.is_none());
        assert!(!parsed.stdin);
    }

    #[test]
    fn new_mods_are_comma_separated() {
        let parsed = parse(&["modsift", "--new-mods", "a,b", "--ordering", "breadcrumb"]);
        assert_eq!(parsed.new_mods, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(parsed.ordering.map(Ordering::from), Some(Ordering::Breadcrumb));
    }

    #[test]
    fn query_conflicts_with_stdin() {
        let result = cli_command().try_get_matches_from(["modsift", "-q", "x", "--stdin"]);
        assert!(result.is_err());
    }

    #[test]
    fn colour_mode_follows_the_terminal_only_on_auto() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));

        let parsed = parse(&["modsift", "--color", "never"]);
        assert_eq!(parsed.color, ColorMode::Never);
    }
}
