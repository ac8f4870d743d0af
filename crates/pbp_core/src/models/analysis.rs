use super::player::{PerPlayer, Player};
use super::point::{Game, Point};
use super::record::MatchRecord;
use serde::{Deserialize, Serialize};

/// Record fields echoed back alongside the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata {
    pub tny_name: String,
    pub date: String,
    pub server1: String,
    pub server2: String,
    pub winner: Player,
    pub score: String,
    pub wh_minutes: Option<u32>,
}

impl From<&MatchRecord> for MatchMetadata {
    fn from(record: &MatchRecord) -> Self {
        Self {
            tny_name: record.tny_name.clone(),
            date: record.date.clone(),
            server1: record.server1.clone(),
            server2: record.server2.clone(),
            winner: record.winner,
            score: record.score.clone(),
            wh_minutes: record.wh_minutes,
        }
    }
}

/// Match-wide per-player counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub aces: PerPlayer<u32>,
    pub double_faults: PerPlayer<u32>,
    pub errors: PerPlayer<u32>,
    pub winners: PerPlayer<u32>,
    pub points_won: PerPlayer<u32>,
    pub service_points_won: PerPlayer<u32>,
    pub return_points_won: PerPlayer<u32>,
    pub games_won: PerPlayer<u32>,
}

/// Break points by player, from that player's own perspective:
/// `faced`/`saved` count on serve, `converted` on return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakPointLedger {
    pub faced: PerPlayer<u32>,
    pub saved: PerPlayer<u32>,
    pub converted: PerPlayer<u32>,
    pub games_broken: PerPlayer<u32>,
}

impl BreakPointLedger {
    pub fn record(&mut self, server: Player, server_won: bool) {
        self.faced.bump(server);
        if server_won {
            self.saved.bump(server);
        } else {
            self.converted.bump(server.opponent());
        }
    }
}

/// Highest-leverage point of the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMoment {
    pub game_index: usize,
    pub point: Point,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RallyStats {
    pub total_points: u32,
    pub average_rally_length: f64,
    pub longest_rally: u32,
}

impl RallyStats {
    pub fn from_lengths(lengths: &[u32]) -> Self {
        let total_points = lengths.len() as u32;
        let average_rally_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().map(|&l| f64::from(l)).sum::<f64>() / lengths.len() as f64
        };
        Self {
            total_points,
            average_rally_length,
            longest_rally: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Full reconstruction of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub metadata: MatchMetadata,
    pub totals: PlayerTotals,
    pub break_points: BreakPointLedger,
    pub rallies: RallyStats,
    pub games: Vec<Game>,
    pub key_moment: Option<KeyMoment>,
}

impl MatchAnalysis {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Every point of the match in play order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.games.iter().flat_map(|g| g.points.iter())
    }
}

/// Aggregate over several analyzed matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub matches_analyzed: u32,
    pub total_games: u32,
    pub total_points: u32,
    pub total_aces: u32,
    pub total_double_faults: u32,
    pub total_errors: u32,
    pub total_winners: u32,
    pub average_rally_length: f64,
}
