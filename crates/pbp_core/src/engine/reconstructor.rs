//! Point Reconstructor
//!
//! Replays the scanner's outcomes for one game against the score tracker,
//! producing immutable `Point`s and the per-game tallies.

use super::aggregator::resolve_game_winner;
use super::key_moment::{leverage, leverage_tags, RecencyClock};
use super::scanner::{PointOutcome, ScannedGame};
use super::score_tracker::{score_state, Tally};
use crate::config::LeverageWeights;
use crate::models::{
    BreakPointLedger, Game, LeverageTags, PerPlayer, Player, Point, PointEvent, ScoreState,
};
use tracing::debug;

/// Accumulates one game point by point; `finish` seals it.
#[derive(Debug)]
pub struct GameBuilder {
    index: usize,
    server: Player,
    tally: Tally,
    score: ScoreState,
    /// First player to reach a "Game" status; later points cannot change it
    decided: Option<Player>,
    points: Vec<Point>,
    aces: PerPlayer<u32>,
    double_faults: PerPlayer<u32>,
    errors: PerPlayer<u32>,
    winners: PerPlayer<u32>,
}

impl GameBuilder {
    pub fn new(index: usize, server: Player) -> Self {
        Self {
            index,
            server,
            tally: Tally::default(),
            score: ScoreState::love_all(),
            decided: None,
            points: Vec::new(),
            aces: PerPlayer::default(),
            double_faults: PerPlayer::default(),
            errors: PerPlayer::default(),
            winners: PerPlayer::default(),
        }
    }

    /// Break point: the game is still open and the returner has 3+ points and leads.
    pub fn is_break_point(&self) -> bool {
        self.decided.is_none() && self.tally.is_game_point_for(self.server.opponent())
    }

    pub fn push(
        &mut self,
        outcome: &PointOutcome,
        clock: &mut RecencyClock,
        weights: &LeverageWeights,
        ledger: &mut BreakPointLedger,
    ) -> &Point {
        let open = self.decided.is_none();
        if !open {
            debug!(game = self.index, "point recorded after game already decided");
        }

        let before = self.score;
        let is_break_point = self.is_break_point();

        self.tally = self.tally.with_point_to(outcome.winner);
        let after = score_state(self.tally);
        if open {
            self.decided = after.status.game_winner();
        }

        if is_break_point {
            ledger.record(self.server, outcome.winner == self.server);
        }

        match outcome.event {
            PointEvent::Ace => self.aces.bump(self.server),
            PointEvent::DoubleFault => self.double_faults.bump(self.server),
            PointEvent::Winner => self.winners.bump(outcome.winner),
            PointEvent::UnforcedError => {}
        }
        if let Some(player) = outcome.error_by {
            self.errors.bump(player);
        }

        let tags = if open {
            leverage_tags(self.tally, self.server)
        } else {
            LeverageTags::default()
        };
        let recency = clock.tick(weights);

        self.points.push(Point {
            number: self.points.len() as u32 + 1,
            rally_length: outcome.rally_length,
            server: self.server,
            event: outcome.event,
            winner: outcome.winner,
            score_before: before,
            score_after: after,
            is_break_point,
            tags,
            leverage: leverage(tags, recency, weights),
        });
        self.score = after;

        &self.points[self.points.len() - 1]
    }

    pub fn finish(self, incomplete_rally_shots: u32) -> Game {
        let winner = self.decided.or_else(|| resolve_game_winner(&self.score, self.tally));
        if winner.is_none() {
            debug!(game = self.index, points = self.points.len(), "game winner undetermined");
        }

        Game {
            index: self.index,
            server: self.server,
            points: self.points,
            aces: self.aces,
            double_faults: self.double_faults,
            errors: self.errors,
            winners: self.winners,
            final_score: self.score,
            winner,
            incomplete_rally_shots,
        }
    }
}

/// Rebuild one game from scanned outcomes.
pub fn reconstruct_game(
    index: usize,
    server: Player,
    scanned: &ScannedGame,
    clock: &mut RecencyClock,
    weights: &LeverageWeights,
    ledger: &mut BreakPointLedger,
) -> Game {
    let mut builder = GameBuilder::new(index, server);
    for outcome in &scanned.outcomes {
        builder.push(outcome, clock, weights, ledger);
    }

    if scanned.dangling_shots > 0 {
        debug!(game = index, shots = scanned.dangling_shots, "discarding unterminated rally");
    }

    builder.finish(scanned.dangling_shots)
}
