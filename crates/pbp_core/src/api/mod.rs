pub mod dataset;
pub mod match_api;

pub use dataset::{summarize, MatchDataset, DEFAULT_SUMMARY_LIMIT};
pub use match_api::{analyze_match, analyze_match_json, analyze_match_with_config};
