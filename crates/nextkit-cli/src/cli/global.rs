//! Flags that shape how a run reports itself rather than what it scaffolds.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

/// Logging, colour, config file and report format.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level on stderr: warnings by default, then info, debug, trace.
    ///
    /// `RUST_LOG` wins over this flag when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "Log level written to stderr while scaffolding:
    (none)  - warnings and errors
    -v      - one line per stage and feature
    -vv     - every command, file write and template copy
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. JSON reports are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output without ANSI codes.
    ///
    /// Any non-empty `NO_COLOR` other than a false-like value (`0`, `false`,
    /// `no`, `off`) turns it on.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with feature defaults and the template repository.
    ///
    /// Must exist when given; the per-user file is optional.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read settings from FILE"
    )]
    pub config: Option<PathBuf>,

    /// `json` prints the run report (or dry-run plan) instead of progress text.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of progress text and the final report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured marks and headers.
    Human,
    /// Same text, no colour.
    Plain,
    /// Run report as JSON on stdout.
    Json,
}
