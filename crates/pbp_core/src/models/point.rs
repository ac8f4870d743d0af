use super::player::{PerPlayer, Player};
use super::score::ScoreState;
use serde::{Deserialize, Serialize};

/// How a point ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointEvent {
    /// Server wins outright.
    Ace,
    /// Returner wins; error by the server.
    DoubleFault,
    /// Hitter of the last rally shot wins.
    Winner,
    /// Opponent of the last rally shot's hitter wins.
    UnforcedError,
}

/// Pressure indicators evaluated on the score after a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeverageTags {
    /// Either player is one point from taking the game (or has taken it)
    pub game_point: bool,
    /// The returner is one point from breaking serve
    pub break_point: bool,
    /// Both players have reached 40
    pub deuce: bool,
}

/// One completed rally. Immutable once appended to its game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// 1-based ordinal within the game
    pub number: u32,
    /// Shots in the rally, terminating code included
    pub rally_length: u32,
    pub server: Player,
    pub event: PointEvent,
    pub winner: Player,
    pub score_before: ScoreState,
    pub score_after: ScoreState,
    /// Returner was one point from breaking serve before this rally
    pub is_break_point: bool,
    pub tags: LeverageTags,
    pub leverage: f64,
}

impl Point {
    pub fn won_by_server(&self) -> bool {
        self.winner == self.server
    }
}

/// One service game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// 0-based, counting only non-empty notation segments
    pub index: usize,
    pub server: Player,
    pub points: Vec<Point>,
    pub aces: PerPlayer<u32>,
    pub double_faults: PerPlayer<u32>,
    pub errors: PerPlayer<u32>,
    pub winners: PerPlayer<u32>,
    pub final_score: ScoreState,
    /// `None` when the notation is too short to decide the game
    pub winner: Option<Player>,
    /// Rally shots left dangling after the last terminating code
    #[serde(default)]
    pub incomplete_rally_shots: u32,
}

impl Game {
    /// Returner took the game.
    pub fn is_break(&self) -> bool {
        self.winner.is_some_and(|w| w != self.server)
    }
}
