//! End-to-end decoding scenarios through the public facade.

use pbp_core::engine::scanner::count_points;
use pbp_core::{
    analyze_match, analyze_match_with_config, AnalyzerConfig, MatchRecord, Player, PointEvent,
    PointLabel, ScoreStatus,
};
use proptest::prelude::*;

fn record(pbp: &str) -> MatchRecord {
    MatchRecord {
        tny_name: "US Open".to_string(),
        date: "08 Sep 19".to_string(),
        server1: "Nadal".to_string(),
        server2: "Medvedev".to_string(),
        winner: Player::One,
        score: "7-5 6-3 5-7 4-6 6-4".to_string(),
        wh_minutes: Some(295),
        pbp: pbp.to_string(),
    }
}

#[test]
fn ace_on_first_serve() {
    let analysis = analyze_match(&record("SRA"));
    let game = &analysis.games[0];
    assert_eq!(game.server, Player::One);
    assert_eq!(game.points.len(), 1);

    let point = &game.points[0];
    assert_eq!(point.rally_length, 3);
    assert_eq!(point.event, PointEvent::Ace);
    assert_eq!(point.winner, Player::One);
    assert_eq!(point.score_before.score_line(), "0-0");
    assert_eq!(point.score_after.player1, PointLabel::Fifteen);
    assert_eq!(point.score_after.player2, PointLabel::Love);
}

#[test]
fn double_fault_credits_returner() {
    let analysis = analyze_match(&record("SRD"));
    let point = &analysis.games[0].points[0];
    assert_eq!(point.winner, Player::Two);
    assert_eq!(point.score_after.player1, PointLabel::Love);
    assert_eq!(point.score_after.player2, PointLabel::Fifteen);
    assert_eq!(analysis.totals.double_faults.player1, 1);
    assert_eq!(analysis.totals.errors.player1, 1);
}

#[test]
fn deuce_reached_then_advantage() {
    // player 1 serving: 1-0, 1-1, 1-2, 2-2, 3-2, 3-3, then the returner's long rally
    let analysis = analyze_match(&record("SRFWSRWDSASREDSRFBFBW"));
    let points = &analysis.games[0].points;
    let reach = points
        .iter()
        .position(|p| p.score_after.status == ScoreStatus::Deuce)
        .expect("deuce reached");

    let next = &points[reach + 1];
    assert_eq!(next.score_before.score_line(), "40-40");
    assert_eq!(next.score_after.status, ScoreStatus::AdvantageP2);
    assert!(!next.is_break_point);
    assert!(points[reach + 2..].is_empty());
}

#[test]
fn empty_notation_is_not_an_error() {
    let analysis = analyze_match(&record(""));
    assert!(analysis.games.is_empty());
    assert_eq!(analysis.totals.aces.total(), 0);
    assert_eq!(analysis.totals.points_won.total(), 0);
    assert_eq!(analysis.break_points.faced.total(), 0);
    assert_eq!(analysis.rallies.total_points, 0);
    assert!(analysis.key_moment.is_none());
}

#[test]
fn two_games_alternate_server() {
    let analysis = analyze_match(&record("SASASASA;SRFWSRFWSRFWSRFW"));
    assert_eq!(analysis.games.len(), 2);
    assert_eq!(analysis.games[0].server, Player::One);
    assert_eq!(analysis.games[1].server, Player::Two);
    assert!(analysis.games[1].points.iter().all(|p| p.server == Player::Two));
    assert_eq!(analysis.games[1].winner, Some(Player::Two));
}

#[test]
fn break_of_serve_is_key_moment() {
    // Game 0: player 1 holds. Game 1: player 2 is broken from 0-40.
    let analysis = analyze_match(&record("SASASASA;DDDD"));
    assert_eq!(analysis.break_points.faced.player2, 1);
    assert_eq!(analysis.break_points.converted.player1, 1);
    assert_eq!(analysis.break_points.games_broken.player1, 1);

    let moment = analysis.key_moment.expect("key moment");
    assert_eq!(moment.game_index, 1);
    assert!(moment.description.contains("Nadal won the point"));
    assert!(moment.description.contains("Medvedev's serve"));
}

#[test]
fn points_after_game_keep_first_winner() {
    let analysis = analyze_match(&record("AAAADDDD;DDDDD"));
    assert_eq!(analysis.games[0].winner, Some(Player::One));
    assert_eq!(analysis.games[1].winner, Some(Player::One));
    assert_eq!(analysis.games[1].points.len(), 5);
    assert_eq!(analysis.totals.games_won.player1, 2);
    assert_eq!(analysis.break_points.faced.player2, 1);
    assert_eq!(analysis.break_points.converted.player1, 1);
    assert_eq!(analysis.break_points.games_broken.player1, 1);
}

#[test]
fn overlapping_alphabet_keeps_rally_precedence() {
    let config = AnalyzerConfig::from_json(r#"{"alphabet": {"rally_codes": "SRFBVE"}}"#).unwrap();
    let analysis = analyze_match_with_config(&record("SREA"), &config);
    let point = &analysis.games[0].points[0];
    assert_eq!(point.event, PointEvent::Ace);
    assert_eq!(point.rally_length, 4);
}

fn notation_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('S'),
            Just('R'),
            Just('F'),
            Just('B'),
            Just('A'),
            Just('D'),
            Just('W'),
            Just('E'),
            Just(';'),
            Just('.'),
            Just('x'),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

proptest! {
    #[test]
    fn prop_points_match_terminating_codes(pbp in notation_strategy()) {
        let config = AnalyzerConfig::default();
        let analysis = analyze_match(&record(&pbp));
        for (game, segment) in analysis.games.iter().zip(pbp.split(';').filter(|s| !s.is_empty())) {
            prop_assert_eq!(game.points.len(), count_points(&config.alphabet, segment));
        }
    }

    #[test]
    fn prop_break_point_ledger_balances(pbp in notation_strategy()) {
        let analysis = analyze_match(&record(&pbp));
        let ledger = &analysis.break_points;
        for player in [Player::One, Player::Two] {
            let saved = *ledger.saved.get(player);
            let converted_against = *ledger.converted.get(player.opponent());
            let faced = *ledger.faced.get(player);
            prop_assert!(saved <= faced);
            prop_assert_eq!(saved + converted_against, faced);
        }

        let flagged = analysis.points().filter(|p| p.is_break_point).count() as u32;
        prop_assert_eq!(ledger.faced.total(), flagged);
    }

    #[test]
    fn prop_games_ordered_and_points_numbered(pbp in notation_strategy()) {
        let analysis = analyze_match(&record(&pbp));
        for (i, game) in analysis.games.iter().enumerate() {
            prop_assert_eq!(game.index, i);
            prop_assert_eq!(game.server, Player::serving_game(i));
            for (j, point) in game.points.iter().enumerate() {
                prop_assert_eq!(point.number as usize, j + 1);
                prop_assert_eq!(point.server, game.server);
            }
            if let Some(last) = game.points.last() {
                prop_assert_eq!(game.final_score, last.score_after);
            }
        }
    }

    #[test]
    fn prop_key_moment_has_max_leverage(pbp in notation_strategy()) {
        let analysis = analyze_match(&record(&pbp));
        match &analysis.key_moment {
            None => prop_assert_eq!(analysis.points().count(), 0),
            Some(moment) => {
                prop_assert!(analysis.points().all(|p| p.leverage <= moment.point.leverage));
            }
        }
    }
}
