//! Match Analysis Facade
//!
//! The single entry point used by presentation layers. Each call builds its own
//! tallies, ledger and selector; nothing is shared between analyses.

use crate::config::AnalyzerConfig;
use crate::engine::aggregate_with_key_moment;
use crate::error::Result;
use crate::models::{MatchAnalysis, MatchMetadata, MatchRecord};
use tracing::info;

pub fn analyze_match(record: &MatchRecord) -> MatchAnalysis {
    analyze_match_with_config(record, &AnalyzerConfig::default())
}

pub fn analyze_match_with_config(record: &MatchRecord, config: &AnalyzerConfig) -> MatchAnalysis {
    let (aggregated, key_moment) = aggregate_with_key_moment(&record.pbp, config, record);

    info!(
        tournament = %record.tny_name,
        player1 = %record.server1,
        player2 = %record.server2,
        games = aggregated.games.len(),
        points = aggregated.rallies.total_points,
        "match analyzed"
    );

    MatchAnalysis {
        metadata: MatchMetadata::from(record),
        totals: aggregated.totals,
        break_points: aggregated.break_points,
        rallies: aggregated.rallies,
        games: aggregated.games,
        key_moment,
    }
}

/// Record JSON in, analysis JSON out.
pub fn analyze_match_json(request_json: &str) -> Result<String> {
    let record = MatchRecord::from_json(request_json)?;
    let config = AnalyzerConfig::from_env()?;
    Ok(analyze_match_with_config(&record, &config).to_json()?)
}
