//! # pbp_core - Point-by-Point Tennis Match Reconstruction
//!
//! Decodes the compact shot-by-shot notation of a tennis match into games and
//! points, scores every game in traditional notation (0/15/30/40/Deuce/Advantage),
//! keeps break-point bookkeeping and picks the single highest-leverage point.
//!
//! ## Features
//! - Pure, deterministic analysis: one record in, one result out
//! - Tolerant decoding: unknown characters and truncated games never fail
//! - Configurable notation alphabet and leverage weights
//! - JSON entry point for presentation layers

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    analyze_match, analyze_match_json, analyze_match_with_config, summarize, MatchDataset,
    DEFAULT_SUMMARY_LIMIT,
};
pub use config::{AnalyzerConfig, LeverageWeights, NotationAlphabet};
pub use error::{AnalysisError, ConfigError, Result};
pub use models::{
    BreakPointLedger, DatasetSummary, Game, KeyMoment, MatchAnalysis, MatchRecord, Player, Point,
    PointEvent, PointLabel, ScoreState, ScoreStatus,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
