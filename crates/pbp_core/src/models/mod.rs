pub mod analysis;
pub mod player;
pub mod point;
pub mod record;
pub mod score;

pub use analysis::{
    BreakPointLedger, DatasetSummary, KeyMoment, MatchAnalysis, MatchMetadata, PlayerTotals,
    RallyStats,
};
pub use player::{PerPlayer, Player};
pub use point::{Game, LeverageTags, Point, PointEvent};
pub use record::MatchRecord;
pub use score::{PointLabel, ScoreState, ScoreStatus};
