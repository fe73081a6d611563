//! Runtime configuration resolution
//!
//! Merges three sources into one immutable [`Config`]:
//! 1. Command-line flags (highest priority)
//! 2. The preference store (`~/.config/vwatch/config.yaml`)
//! 3. Built-in defaults
//!
//! Resolution runs once at startup. Nothing is mutated afterwards, so the
//! result can be shared freely between threads.

use std::ffi::OsString;
use std::time::Duration;

use serde::Serialize;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result};
use crate::interval::{parse_interval, MIN_INTERVAL};
use crate::keymap::KeymapConfig;
use crate::preferences::Preferences;
use crate::run_mode::RunMode;
use crate::theme::ThemeConfig;

/// What to run and how often
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    /// The command to watch; empty only when help or version was requested
    pub cmd: String,
    pub args: Vec<String>,
    pub interval: Duration,
    pub mode: RunMode,
    pub differences: bool,
    pub no_title: bool,
    pub help: bool,
    pub version: bool,
}

impl RuntimeConfig {
    /// True when the process should print help or version instead of watching
    pub fn short_circuits(&self) -> bool {
        self.help || self.version
    }
}

/// Settings passed through to the command runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralConfig {
    pub debug: bool,
    pub shell: String,
    pub shell_options: String,
}

/// Shell used when neither `--shell` nor `general.shell` is set
pub fn default_shell() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd"
    } else {
        "sh"
    }
}

impl GeneralConfig {
    /// Flag values win over stored preferences, which win over defaults
    fn resolve(cli: &CliArgs, prefs: &Preferences) -> Self {
        let debug = cli
            .debug
            .then_some(true)
            .or_else(|| prefs.get_bool("general.debug"))
            .unwrap_or(false);

        let shell = cli
            .shell
            .clone()
            .or_else(|| prefs.get_str("general.shell"))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_shell().to_string());

        let shell_options = cli
            .shell_options
            .clone()
            .or_else(|| prefs.get_str("general.shell_options"))
            .unwrap_or_default();

        Self {
            debug,
            shell,
            shell_options,
        }
    }
}

/// The fully resolved configuration handed to the rest of the program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    pub general: GeneralConfig,
    pub theme: ThemeConfig,
    pub keymap: KeymapConfig,
}

impl Config {
    /// Resolve the configuration from raw arguments (without the program name)
    pub fn resolve<I, T>(args: I, prefs: &Preferences) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::parse_args(args)?;
        Self::from_cli(cli, prefs)
    }

    /// Resolve the configuration from already-parsed flags
    pub fn from_cli(cli: CliArgs, prefs: &Preferences) -> Result<Self> {
        let interval = parse_interval(&cli.interval)?;
        let mode = RunMode::from_flags(cli.precise, cli.clockwork);
        let general = GeneralConfig::resolve(&cli, prefs);
        let theme = ThemeConfig::from_preferences(prefs);
        let keymap = KeymapConfig::from_preferences(prefs);

        if interval < MIN_INTERVAL {
            return Err(ConfigError::IntervalTooSmall {
                interval,
                minimum: MIN_INTERVAL,
            });
        }

        let short_circuit = cli.help || cli.version;
        let mut command = cli.command.into_iter();
        let cmd = match command.next() {
            Some(cmd) => cmd,
            None if short_circuit => String::new(),
            None => return Err(ConfigError::NoCommand),
        };

        let config = Config {
            runtime: RuntimeConfig {
                cmd,
                args: command.collect(),
                interval,
                mode,
                differences: cli.differences,
                no_title: cli.no_title,
                help: cli.help,
                version: cli.version,
            },
            general,
            theme,
            keymap,
        };

        tracing::debug!(
            cmd = %config.runtime.cmd,
            interval = ?config.runtime.interval,
            mode = %config.runtime.mode,
            shell = %config.general.shell,
            "Resolved configuration"
        );

        Ok(config)
    }
}
