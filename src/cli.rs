//! Command-line flag surface
//!
//! Flag parsing stops at the first positional token: that token is the
//! command to watch and everything after it (flags included) belongs to the
//! command. `--` ends flag parsing explicitly.

use clap::{ArgAction, CommandFactory, Parser};

use crate::interval::DEFAULT_INTERVAL;

/// Execute a program periodically, showing its output and keeping a browsable history
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "vwatch",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Seconds to wait between updates (e.g. 2, 0.5, 1500ms, 1m)
    #[arg(
        short = 'n',
        long,
        value_name = "INTERVAL",
        default_value = DEFAULT_INTERVAL,
        allow_hyphen_values = true
    )]
    pub interval: String,

    /// Attempt to run the command in precise intervals
    #[arg(short = 'p', long)]
    pub precise: bool,

    /// Run the command in precise intervals forcibly
    #[arg(short = 'c', long)]
    pub clockwork: bool,

    /// Highlight changes between updates
    #[arg(short = 'd', long)]
    pub differences: bool,

    /// Turn off the header
    #[arg(short = 't', long)]
    pub no_title: bool,

    /// Display this help and exit
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Output version information and exit
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Write debug logs
    #[arg(long)]
    pub debug: bool,

    /// Shell used to run the command (default "sh")
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Additional shell options
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub shell_options: Option<String>,

    /// The command to run, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, num_args = 0..)]
    pub command: Vec<String>,
}

impl CliArgs {
    /// Parse the argument list, without the program name
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Rendered `--help` text
    pub fn help_text() -> String {
        Self::command()
            .override_usage("vwatch [OPTIONS] COMMAND [ARGS]...")
            .render_help()
            .to_string()
    }

    /// Rendered `--version` text
    pub fn version_text() -> String {
        format!("vwatch {}", env!("CARGO_PKG_VERSION"))
    }
}
