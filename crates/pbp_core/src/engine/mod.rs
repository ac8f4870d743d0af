//! Decode-and-score pipeline.
//!
//! notation → [`aggregator`] → (per game) [`reconstructor`] → [`score_tracker`],
//! with [`scanner`] classifying characters and [`key_moment`] ranking points.

pub mod aggregator;
pub mod key_moment;
pub mod reconstructor;
pub mod scanner;
pub mod score_tracker;

pub use aggregator::{aggregate, aggregate_with_key_moment, resolve_game_winner, AggregatedMatch};
pub use key_moment::{KeyMomentSelector, RecencyClock};
pub use reconstructor::{reconstruct_game, GameBuilder};
pub use scanner::{classify, scan_game, PointOutcome, ScannedGame, ShotClass};
pub use score_tracker::{score_state, Tally};
