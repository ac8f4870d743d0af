//! Indexed collection of match records loaded from one dataset.

use super::match_api::analyze_match_with_config;
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{DatasetSummary, MatchAnalysis, MatchRecord};
use std::collections::HashMap;
use tracing::debug;

/// Matches folded into a summary when the caller does not say otherwise.
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct MatchDataset {
    records: Vec<MatchRecord>,
}

impl MatchDataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    /// Validate raw rows. The first malformed row aborts the load.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = HashMap<String, String>>,
    {
        let records = rows
            .into_iter()
            .map(|row| MatchRecord::from_fields(&row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Result<&MatchRecord> {
        self.records.get(index).ok_or(AnalysisError::MatchNotFound {
            index,
            available: self.records.len(),
        })
    }

    pub fn analyze_at(&self, index: usize, config: &AnalyzerConfig) -> Result<MatchAnalysis> {
        Ok(analyze_match_with_config(self.get(index)?, config))
    }

    /// Analyze up to `limit` records that carry notation and fold them together.
    pub fn summarize(&self, limit: usize, config: &AnalyzerConfig) -> DatasetSummary {
        let analyses: Vec<MatchAnalysis> = self
            .records
            .iter()
            .filter(|record| record.has_notation())
            .take(limit)
            .map(|record| analyze_match_with_config(record, config))
            .collect();
        debug!(analyzed = analyses.len(), available = self.records.len(), "dataset summarized");
        summarize(&analyses)
    }
}

pub fn summarize(analyses: &[MatchAnalysis]) -> DatasetSummary {
    let mut summary = DatasetSummary::default();
    let mut rally_total: u64 = 0;

    for analysis in analyses {
        summary.matches_analyzed += 1;
        summary.total_games += analysis.games.len() as u32;
        summary.total_points += analysis.rallies.total_points;
        summary.total_aces += analysis.totals.aces.total();
        summary.total_double_faults += analysis.totals.double_faults.total();
        summary.total_errors += analysis.totals.errors.total();
        summary.total_winners += analysis.totals.winners.total();
        rally_total += analysis.points().map(|p| u64::from(p.rally_length)).sum::<u64>();
    }

    if summary.total_points > 0 {
        summary.average_rally_length = rally_total as f64 / f64::from(summary.total_points);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    fn record(pbp: &str) -> MatchRecord {
        MatchRecord {
            tny_name: "Rome".to_string(),
            date: "19 May 19".to_string(),
            server1: "Nadal".to_string(),
            server2: "Djokovic".to_string(),
            winner: Player::One,
            score: "6-0 4-6 6-1".to_string(),
            wh_minutes: Some(141),
            pbp: pbp.to_string(),
        }
    }

    #[test]
    fn test_out_of_range_index_is_not_found() {
        let dataset = MatchDataset::new(vec![record("SA")]);
        let err = dataset.analyze_at(5, &AnalyzerConfig::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, AnalysisError::MatchNotFound { index: 5, available: 1 }));
    }

    #[test]
    fn test_analyze_at_valid_index() {
        let dataset = MatchDataset::new(vec![record(""), record("SRA;SRD")]);
        let analysis = dataset.analyze_at(1, &AnalyzerConfig::default()).unwrap();
        assert_eq!(analysis.games.len(), 2);
    }

    #[test]
    fn test_from_rows_rejects_missing_keys() {
        let row: HashMap<String, String> =
            [("pbp".to_string(), "SA".to_string())].into_iter().collect();
        assert!(matches!(
            MatchDataset::from_rows(vec![row]),
            Err(AnalysisError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_summary_skips_empty_notation_and_respects_limit() {
        let dataset = MatchDataset::new(vec![
            record(""),
            record("SA;SA"),
            record("SRFW"),
            record("D"),
        ]);
        let summary = dataset.summarize(2, &AnalyzerConfig::default());
        assert_eq!(summary.matches_analyzed, 2);
        assert_eq!(summary.total_games, 3);
        assert_eq!(summary.total_points, 3);
        assert_eq!(summary.total_aces, 2);
        assert_eq!(summary.total_winners, 1);
        // rallies: 2, 2, 4
        assert!((summary.average_rally_length - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summarize(&[]), DatasetSummary::default());
    }
}
