//! Domain Layer - Core value types for the DCA tuner
//!
//! Pure data types with no I/O: date-aligned metric collections, evaluation
//! window sizes, and leaderboard rows. All external interactions happen
//! through the ports layer.

pub mod ranking;
pub mod series;
pub mod window;

pub use ranking::RankedMetric;
pub use series::{AlignmentError, MetricData};
pub use window::{WindowSize, WindowSizeParseError};
