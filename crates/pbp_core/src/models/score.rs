use super::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traditional tennis label for one player's side of a game score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointLabel {
    #[serde(rename = "0")]
    Love,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
    Deuce,
    Advantage,
    Game,
}

impl PointLabel {
    /// 0 → "0", 1 → "15", 2 → "30", 3 and above → "40".
    pub const fn from_tally(points: u32) -> Self {
        match points {
            0 => PointLabel::Love,
            1 => PointLabel::Fifteen,
            2 => PointLabel::Thirty,
            _ => PointLabel::Forty,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PointLabel::Love => "0",
            PointLabel::Fifteen => "15",
            PointLabel::Thirty => "30",
            PointLabel::Forty => "40",
            PointLabel::Deuce => "Deuce",
            PointLabel::Advantage => "Advantage",
            PointLabel::Game => "Game",
        }
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    #[default]
    Playing,
    Deuce,
    AdvantageP1,
    AdvantageP2,
    GameP1,
    GameP2,
}

impl ScoreStatus {
    pub const fn advantage(player: Player) -> Self {
        match player {
            Player::One => ScoreStatus::AdvantageP1,
            Player::Two => ScoreStatus::AdvantageP2,
        }
    }

    pub const fn game(player: Player) -> Self {
        match player {
            Player::One => ScoreStatus::GameP1,
            Player::Two => ScoreStatus::GameP2,
        }
    }

    /// Player who has won the game, if any.
    pub const fn game_winner(self) -> Option<Player> {
        match self {
            ScoreStatus::GameP1 => Some(Player::One),
            ScoreStatus::GameP2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Game score as shown on a scoreboard. Always rebuilt from the raw tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub player1: PointLabel,
    pub player2: PointLabel,
    pub status: ScoreStatus,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::love_all()
    }
}

impl ScoreState {
    pub const fn love_all() -> Self {
        Self { player1: PointLabel::Love, player2: PointLabel::Love, status: ScoreStatus::Playing }
    }

    /// Compact "p1-p2" form: "15-0", "40-40" at deuce, "AD-40" on advantage.
    pub fn score_line(&self) -> String {
        let side = |label: PointLabel| match label {
            PointLabel::Deuce => "40",
            PointLabel::Advantage => "AD",
            other => other.as_str(),
        };
        format!("{}-{}", side(self.player1), side(self.player2))
    }
}

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.score_line())
    }
}
