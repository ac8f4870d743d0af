//! Key-Moment Selector
//!
//! Leverage is a weighted sum of pressure indicators on the post-point score,
//! scaled by how late in the match the point falls. The selector keeps the first
//! point with the strictly highest leverage.

use super::score_tracker::Tally;
use crate::config::LeverageWeights;
use crate::models::{KeyMoment, LeverageTags, MatchRecord, Player, Point};

/// Pressure indicators of a post-point tally, seen from the game's server.
pub fn leverage_tags(after: Tally, server: Player) -> LeverageTags {
    LeverageTags {
        game_point: after.leader().is_some_and(|p| after.of(p) >= 3),
        break_point: after.is_game_point_for(server.opponent()),
        deuce: after.is_deuce_phase(),
    }
}

pub fn leverage(tags: LeverageTags, recency: f64, weights: &LeverageWeights) -> f64 {
    let indicator = |on: bool, weight: f64| if on { weight } else { 0.0 };
    let base = indicator(tags.game_point, weights.game_point)
        + indicator(tags.break_point, weights.break_point)
        + indicator(tags.deuce, weights.deuce);
    base * recency
}

/// Position of each point within the whole match.
#[derive(Debug, Clone, Copy)]
pub struct RecencyClock {
    seen: usize,
    total: usize,
}

impl RecencyClock {
    pub fn new(total: usize) -> Self {
        Self { seen: 0, total }
    }

    /// Advance past one point and return its recency weight.
    pub fn tick(&mut self, weights: &LeverageWeights) -> f64 {
        self.seen += 1;
        let progress = if self.total == 0 {
            0.0
        } else {
            self.seen.min(self.total) as f64 / self.total as f64
        };
        weights.recency_base + weights.recency_span * progress
    }

    pub fn seen(&self) -> usize {
        self.seen
    }
}

#[derive(Debug, Default)]
pub struct KeyMomentSelector {
    best: Option<(usize, Point)>,
}

impl KeyMomentSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, game_index: usize, point: &Point) {
        let replace = match &self.best {
            None => true,
            Some((_, best)) => point.leverage > best.leverage,
        };
        if replace {
            self.best = Some((game_index, point.clone()));
        }
    }

    pub fn finish(self, record: &MatchRecord) -> Option<KeyMoment> {
        self.best.map(|(game_index, point)| KeyMoment {
            game_index,
            description: describe(&point, record),
            point,
        })
    }
}

pub fn describe(point: &Point, record: &MatchRecord) -> String {
    let winner = record.player_name(point.winner);
    let server = record.player_name(point.server);

    let mut tags = Vec::new();
    if point.tags.break_point {
        tags.push("break point");
    }
    if point.tags.game_point {
        tags.push("game point");
    }
    if point.tags.deuce {
        tags.push("deuce");
    }

    if tags.is_empty() {
        format!("{winner} won the point on {server}'s serve")
    } else {
        format!("{winner} won the point ({}) on {server}'s serve", tags.join(", "))
    }
}
