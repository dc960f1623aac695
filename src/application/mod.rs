//! Application Layer
//!
//! Coordinates the engine over a full metric collection: merges base and
//! derived metrics, runs the z-score / softmax / DCA pipeline per metric,
//! and ranks the outcomes.

pub mod ranker;

pub use ranker::{collect_all_metrics, rank_metrics, RankSettings};
