//! Execution cadence policy

use std::fmt;

use serde::Serialize;

/// How strictly successive runs align to the configured interval
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Wait the interval after each run completes
    #[default]
    Sequential,
    /// Keep start times on the interval grid, correcting for run duration
    Precise,
    /// Start on the interval grid regardless of run duration, even if runs overlap
    Clockwork,
}

impl RunMode {
    /// Derive the run mode from the `--precise` and `--clockwork` flags.
    ///
    /// Clockwork wins when both are set.
    pub fn from_flags(precise: bool, clockwork: bool) -> Self {
        let mut mode = RunMode::Sequential;
        if precise {
            mode = RunMode::Precise;
        }
        if clockwork {
            mode = RunMode::Clockwork;
        }
        mode
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Sequential => "sequential",
            RunMode::Precise => "precise",
            RunMode::Clockwork => "clockwork",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_sequential() {
        assert_eq!(RunMode::from_flags(false, false), RunMode::Sequential);
    }

    #[test]
    fn test_precise_flag() {
        assert_eq!(RunMode::from_flags(true, false), RunMode::Precise);
    }

    #[test]
    fn test_clockwork_flag() {
        assert_eq!(RunMode::from_flags(false, true), RunMode::Clockwork);
    }

    #[test]
    fn test_clockwork_overrides_precise() {
        assert_eq!(RunMode::from_flags(true, true), RunMode::Clockwork);
    }

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(RunMode::default(), RunMode::Sequential);
        assert_eq!(RunMode::default().to_string(), "sequential");
    }
}
