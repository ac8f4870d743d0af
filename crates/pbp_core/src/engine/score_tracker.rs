//! Score Tracker: raw point tallies → scoreboard labels.

use crate::models::{Player, PointLabel, ScoreState, ScoreStatus};

/// Running point tallies for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub player1: u32,
    pub player2: u32,
}

impl Tally {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn with_point_to(self, player: Player) -> Self {
        match player {
            Player::One => Self { player1: self.player1 + 1, ..self },
            Player::Two => Self { player2: self.player2 + 1, ..self },
        }
    }

    /// Player strictly ahead, if any.
    pub fn leader(&self) -> Option<Player> {
        use std::cmp::Ordering::*;
        match self.player1.cmp(&self.player2) {
            Greater => Some(Player::One),
            Less => Some(Player::Two),
            Equal => None,
        }
    }

    pub fn margin(&self) -> u32 {
        self.player1.abs_diff(self.player2)
    }

    /// `player` has at least three points and leads: one more point ends the game.
    pub fn is_game_point_for(&self, player: Player) -> bool {
        self.of(player) >= 3 && self.leader() == Some(player)
    }

    pub fn is_deuce_phase(&self) -> bool {
        self.player1 >= 3 && self.player2 >= 3
    }
}

/// Pure: the same tallies always produce the same state.
pub fn score_state(tally: Tally) -> ScoreState {
    let (a, b) = (tally.player1, tally.player2);

    if let Some(leader) = tally.leader() {
        if tally.of(leader) >= 4 && tally.margin() >= 2 {
            let loser = PointLabel::from_tally(tally.of(leader.opponent()));
            return labelled(leader, PointLabel::Game, loser, ScoreStatus::game(leader));
        }
    }

    if tally.is_deuce_phase() {
        return match tally.leader() {
            None => ScoreState {
                player1: PointLabel::Deuce,
                player2: PointLabel::Deuce,
                status: ScoreStatus::Deuce,
            },
            Some(leader) => labelled(
                leader,
                PointLabel::Advantage,
                PointLabel::Forty,
                ScoreStatus::advantage(leader),
            ),
        };
    }

    ScoreState {
        player1: PointLabel::from_tally(a),
        player2: PointLabel::from_tally(b),
        status: ScoreStatus::Playing,
    }
}

fn labelled(
    leader: Player,
    lead: PointLabel,
    trail: PointLabel,
    status: ScoreStatus,
) -> ScoreState {
    match leader {
        Player::One => ScoreState { player1: lead, player2: trail, status },
        Player::Two => ScoreState { player1: trail, player2: lead, status },
    }
}
