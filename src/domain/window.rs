//! Evaluation Window Sizes
//!
//! Both the z-score lookback and the DCA evaluation period are expressed as
//! a `WindowSize`: a fixed number of days or the whole available history.
//! Presets match the UI ranges: 2yr = 730, 4yr = 1460, 8yr = 2920 days.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Days in the `2yr` preset window.
pub const TWO_YEARS: usize = 730;
/// Days in the `4yr` preset window (the default).
pub const FOUR_YEARS: usize = 1460;
/// Days in the `8yr` preset window.
pub const EIGHT_YEARS: usize = 2920;

/// A trailing evaluation window over a daily time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    /// The trailing `n` days, clamped to available history.
    Days(usize),
    /// All available history.
    AllTime,
}

impl WindowSize {
    /// Number of days the window actually covers given `history_len` days of
    /// data. A nominal window longer than the elapsed history degrades to
    /// the full history rather than inflating downstream denominators.
    pub fn effective_len(self, history_len: usize) -> usize {
        match self {
            WindowSize::Days(n) => n.min(history_len),
            WindowSize::AllTime => history_len,
        }
    }

    /// Start index of the rolling window ending at index `i` (inclusive).
    pub fn start_index(self, i: usize) -> usize {
        match self {
            WindowSize::Days(n) => i.saturating_sub(n.saturating_sub(1)),
            WindowSize::AllTime => 0,
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize::Days(FOUR_YEARS)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowSize::Days(TWO_YEARS) => write!(f, "2yr"),
            WindowSize::Days(FOUR_YEARS) => write!(f, "4yr"),
            WindowSize::Days(EIGHT_YEARS) => write!(f, "8yr"),
            WindowSize::Days(n) => write!(f, "{}d", n),
            WindowSize::AllTime => write!(f, "all"),
        }
    }
}

/// Error parsing a window size from its config/CLI spelling.
#[derive(Debug, Clone, Error)]
#[error("invalid window size '{0}' (expected 2yr, 4yr, 8yr, all, or a day count)")]
pub struct WindowSizeParseError(pub String);

impl FromStr for WindowSize {
    type Err = WindowSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2yr" => Ok(WindowSize::Days(TWO_YEARS)),
            "4yr" => Ok(WindowSize::Days(FOUR_YEARS)),
            "8yr" => Ok(WindowSize::Days(EIGHT_YEARS)),
            "all" => Ok(WindowSize::AllTime),
            other => {
                let digits = other.strip_suffix('d').unwrap_or(other);
                match digits.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(WindowSize::Days(n)),
                    _ => Err(WindowSizeParseError(other.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("2yr".parse::<WindowSize>().unwrap(), WindowSize::Days(730));
        assert_eq!("4yr".parse::<WindowSize>().unwrap(), WindowSize::Days(1460));
        assert_eq!("8yr".parse::<WindowSize>().unwrap(), WindowSize::Days(2920));
        assert_eq!("all".parse::<WindowSize>().unwrap(), WindowSize::AllTime);
    }

    #[test]
    fn test_day_count_parsing() {
        assert_eq!("90".parse::<WindowSize>().unwrap(), WindowSize::Days(90));
        assert_eq!("90d".parse::<WindowSize>().unwrap(), WindowSize::Days(90));
        assert!("0".parse::<WindowSize>().is_err());
        assert!("soon".parse::<WindowSize>().is_err());
    }

    #[test]
    fn test_effective_len_clamps_to_history() {
        assert_eq!(WindowSize::Days(1460).effective_len(500), 500);
        assert_eq!(WindowSize::Days(30).effective_len(500), 30);
        assert_eq!(WindowSize::AllTime.effective_len(500), 500);
        assert_eq!(WindowSize::Days(10).effective_len(0), 0);
    }

    #[test]
    fn test_start_index() {
        let w = WindowSize::Days(3);
        assert_eq!(w.start_index(0), 0);
        assert_eq!(w.start_index(2), 0);
        assert_eq!(w.start_index(5), 3);
        assert_eq!(WindowSize::AllTime.start_index(5), 0);
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["2yr", "4yr", "8yr", "all", "90d"] {
            let w: WindowSize = s.parse().unwrap();
            assert_eq!(w.to_string(), s);
        }
    }
}
