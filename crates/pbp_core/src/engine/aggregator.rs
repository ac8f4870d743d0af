//! Game Aggregator
//!
//! Splits a match notation into games, alternates the server, and folds each
//! game into match-wide totals and the break-point ledger.

use super::key_moment::{KeyMomentSelector, RecencyClock};
use super::reconstructor::reconstruct_game;
use super::scanner::{count_points, scan_game};
use super::score_tracker::Tally;
use crate::config::AnalyzerConfig;
use crate::models::{
    BreakPointLedger, Game, KeyMoment, MatchRecord, Player, PlayerTotals, RallyStats, ScoreState,
};
use tracing::debug;

/// Everything derived from one notation string.
#[derive(Debug, Clone, Default)]
pub struct AggregatedMatch {
    pub games: Vec<Game>,
    pub totals: PlayerTotals,
    pub break_points: BreakPointLedger,
    pub rallies: RallyStats,
}

/// Non-empty game segments, in order.
pub fn game_segments<'a>(
    notation: &'a str,
    delimiter: char,
) -> impl Iterator<Item = &'a str> + 'a {
    notation.split(delimiter).filter(|segment| !segment.is_empty())
}

/// Winner from a "Game" status, else the raw point leader, else undetermined.
pub fn resolve_game_winner(score: &ScoreState, tally: Tally) -> Option<Player> {
    score.status.game_winner().or_else(|| tally.leader())
}

pub fn aggregate(
    notation: &str,
    config: &AnalyzerConfig,
    selector: &mut KeyMomentSelector,
) -> AggregatedMatch {
    let alphabet = &config.alphabet;
    let delimiter = alphabet.game_delimiter;

    let total_points: usize =
        game_segments(notation, delimiter).map(|s| count_points(alphabet, s)).sum();
    let mut clock = RecencyClock::new(total_points);

    let mut result = AggregatedMatch::default();
    let mut rally_lengths = Vec::with_capacity(total_points);

    for (index, segment) in game_segments(notation, delimiter).enumerate() {
        let server = Player::serving_game(index);
        let scanned = scan_game(alphabet, segment, server);
        let game = reconstruct_game(
            index,
            server,
            &scanned,
            &mut clock,
            &config.leverage,
            &mut result.break_points,
        );

        for point in &game.points {
            rally_lengths.push(point.rally_length);
            selector.observe(index, point);
        }
        fold_game(&mut result.totals, &mut result.break_points, &game);

        debug!(
            game = index,
            server = server.number(),
            points = game.points.len(),
            winner = ?game.winner.map(Player::number),
            "game reconstructed"
        );
        result.games.push(game);
    }

    result.rallies = RallyStats::from_lengths(&rally_lengths);
    result
}

fn fold_game(totals: &mut PlayerTotals, ledger: &mut BreakPointLedger, game: &Game) {
    totals.aces.add(&game.aces);
    totals.double_faults.add(&game.double_faults);
    totals.errors.add(&game.errors);
    totals.winners.add(&game.winners);

    for point in &game.points {
        totals.points_won.bump(point.winner);
        if point.won_by_server() {
            totals.service_points_won.bump(point.winner);
        } else {
            totals.return_points_won.bump(point.winner);
        }
    }

    if let Some(winner) = game.winner {
        totals.games_won.bump(winner);
        if winner != game.server {
            ledger.games_broken.bump(winner);
        }
    }
}

/// Aggregate and select the key moment in one pass.
pub fn aggregate_with_key_moment(
    notation: &str,
    config: &AnalyzerConfig,
    record: &MatchRecord,
) -> (AggregatedMatch, Option<KeyMoment>) {
    let mut selector = KeyMomentSelector::new();
    let aggregated = aggregate(notation, config, &mut selector);
    (aggregated, selector.finish(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(notation: &str) -> AggregatedMatch {
        aggregate(notation, &AnalyzerConfig::default(), &mut KeyMomentSelector::new())
    }

    #[test]
    fn test_empty_notation() {
        let result = run("");
        assert!(result.games.is_empty());
        assert_eq!(result.totals, PlayerTotals::default());
        assert_eq!(result.break_points, BreakPointLedger::default());
        assert_eq!(result.rallies, RallyStats::default());
    }

    #[test]
    fn test_server_alternates() {
        let result = run("SASASASA;SASASASA");
        assert_eq!(result.games.len(), 2);
        assert_eq!(result.games[0].server, Player::One);
        assert_eq!(result.games[1].server, Player::Two);
        assert_eq!(result.totals.aces.player1, 4);
        assert_eq!(result.totals.aces.player2, 4);
        assert_eq!(result.totals.games_won, crate::models::PerPlayer { player1: 1, player2: 1 });
    }

    #[test]
    fn test_empty_segments_do_not_consume_index() {
        let result = run(";;SA;;SA;");
        assert_eq!(result.games.len(), 2);
        assert_eq!(result.games[0].index, 0);
        assert_eq!(result.games[1].index, 1);
        assert_eq!(result.games[1].server, Player::Two);
    }

    #[test]
    fn test_break_credits_returner() {
        // player 1 serves and double-faults four times
        let result = run("DDDD");
        assert_eq!(result.games[0].winner, Some(Player::Two));
        assert_eq!(result.break_points.games_broken.player2, 1);
        assert_eq!(result.break_points.games_broken.player1, 0);
        assert_eq!(result.totals.return_points_won.player2, 4);
        assert_eq!(result.totals.errors.player1, 4);
    }

    #[test]
    fn test_malformed_segment_kept() {
        let result = run("SASASASA;SRSR;SA");
        assert_eq!(result.games.len(), 3);
        assert!(result.games[1].points.is_empty());
        assert_eq!(result.games[1].winner, None);
        assert_eq!(result.games[2].server, Player::One);
        assert_eq!(result.totals.aces.player1, 5);
    }

    #[test]
    fn test_rally_stats() {
        let result = run("SRFBW;A");
        assert_eq!(result.rallies.total_points, 2);
        assert_eq!(result.rallies.longest_rally, 5);
        assert!((result.rallies.average_rally_length - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_game_winner_tie_is_none() {
        let open = ScoreState::love_all();
        assert_eq!(resolve_game_winner(&open, Tally::new(2, 2)), None);
        assert_eq!(resolve_game_winner(&open, Tally::new(0, 1)), Some(Player::Two));
    }
}
