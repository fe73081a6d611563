//! Errors produced while resolving the runtime configuration

use std::num::ParseFloatError;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while turning flags and preferences into a [`Config`].
///
/// `MalformedKeyStroke` and `UnresolvableColor` never escape resolution: the
/// keymap and theme resolvers swallow them and fall back to defaults. The rest
/// abort startup.
///
/// [`Config`]: crate::config::Config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The interval string is neither a duration expression nor a number of seconds.
    #[error("malformed interval {input:?}: {source}")]
    MalformedInterval {
        input: String,
        #[source]
        source: IntervalSyntaxError,
    },

    /// The interval parsed but is below the refresh floor.
    #[error("interval too small: {interval:?} (minimum is {minimum:?})")]
    IntervalTooSmall { interval: Duration, minimum: Duration },

    /// No trailing command was given.
    #[error("command is required")]
    NoCommand,

    /// A chord string could not be parsed into a keystroke.
    #[error("cannot parse key: {0:?}")]
    MalformedKeyStroke(String),

    /// A color name or hex code could not be resolved.
    #[error("cannot resolve color: {0:?}")]
    UnresolvableColor(String),

    /// The flag surface rejected the arguments (unknown flag, missing value, ...).
    #[error(transparent)]
    InvalidFlags(#[from] clap::Error),

    /// The preference file exists but could not be read or parsed.
    #[error("failed to load preferences from {}: {message}", path.display())]
    Preferences { path: PathBuf, message: String },
}

/// Why an interval string failed the bare-seconds fallback
#[derive(Debug, Error)]
pub enum IntervalSyntaxError {
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("not a finite number of seconds")]
    NotFinite,
    #[error("duration out of range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
