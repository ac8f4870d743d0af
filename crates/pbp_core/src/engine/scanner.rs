//! Notation Scanner
//!
//! Walks one game's notation and turns terminating codes into completed-point
//! events. Classification is a static lookup per character:
//!
//! 1. rally code → extends the rally in progress
//! 2. terminating code → closes the point
//! 3. anything else → ignored
//!
//! Rally shot k (0-based within the point) is struck by the server when k is even
//! and by the returner when k is odd.

use crate::config::NotationAlphabet;
use crate::models::{Player, PointEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotClass {
    Rally,
    Terminal(PointEvent),
    Ignored,
}

/// Rally codes are checked before terminating codes, so a code listed in both
/// sets never ends a point.
pub fn classify(alphabet: &NotationAlphabet, c: char) -> ShotClass {
    if alphabet.rally_codes.contains(c) {
        ShotClass::Rally
    } else if c == alphabet.ace {
        ShotClass::Terminal(PointEvent::Ace)
    } else if c == alphabet.double_fault {
        ShotClass::Terminal(PointEvent::DoubleFault)
    } else if c == alphabet.winner {
        ShotClass::Terminal(PointEvent::Winner)
    } else if c == alphabet.unforced_error {
        ShotClass::Terminal(PointEvent::UnforcedError)
    } else {
        ShotClass::Ignored
    }
}

/// A point closed by a terminating code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOutcome {
    pub rally_length: u32,
    pub event: PointEvent,
    pub winner: Player,
    /// Player charged with an error, for double faults and unforced errors
    pub error_by: Option<Player>,
}

/// Everything the scanner found in one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedGame {
    pub outcomes: Vec<PointOutcome>,
    /// Rally shots after the last terminating code
    pub dangling_shots: u32,
}

pub fn scan_game(alphabet: &NotationAlphabet, segment: &str, server: Player) -> ScannedGame {
    let mut outcomes = Vec::new();
    let mut shots: u32 = 0;

    for c in segment.chars() {
        match classify(alphabet, c) {
            ShotClass::Rally => shots += 1,
            ShotClass::Terminal(event) => {
                outcomes.push(resolve(event, shots, server));
                shots = 0;
            }
            ShotClass::Ignored => {}
        }
    }

    ScannedGame { outcomes, dangling_shots: shots }
}

/// Number of terminating codes in a segment, without building outcomes.
pub fn count_points(alphabet: &NotationAlphabet, segment: &str) -> usize {
    segment
        .chars()
        .filter(|&c| matches!(classify(alphabet, c), ShotClass::Terminal(_)))
        .count()
}

fn resolve(event: PointEvent, shots: u32, server: Player) -> PointOutcome {
    // With no rally shot on record the serve itself is the last stroke.
    let last_hitter = if shots == 0 || (shots - 1) % 2 == 0 { server } else { server.opponent() };

    let (winner, error_by) = match event {
        PointEvent::Ace => (server, None),
        PointEvent::DoubleFault => (server.opponent(), Some(server)),
        PointEvent::Winner => (last_hitter, None),
        PointEvent::UnforcedError => (last_hitter.opponent(), Some(last_hitter)),
    };

    PointOutcome { rally_length: shots + 1, event, winner, error_by }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> NotationAlphabet {
        NotationAlphabet::default()
    }

    #[test]
    fn test_classify_default_alphabet() {
        let a = alphabet();
        assert_eq!(classify(&a, 'S'), ShotClass::Rally);
        assert_eq!(classify(&a, 'B'), ShotClass::Rally);
        assert_eq!(classify(&a, 'A'), ShotClass::Terminal(PointEvent::Ace));
        assert_eq!(classify(&a, 'E'), ShotClass::Terminal(PointEvent::UnforcedError));
        assert_eq!(classify(&a, '.'), ShotClass::Ignored);
        assert_eq!(classify(&a, 'x'), ShotClass::Ignored);
    }

    #[test]
    fn test_rally_wins_over_terminal_when_overlapping() {
        let mut a = alphabet();
        a.rally_codes.push('E');
        assert_eq!(classify(&a, 'E'), ShotClass::Rally);

        let scanned = scan_game(&a, "SRE", Player::One);
        assert!(scanned.outcomes.is_empty());
        assert_eq!(scanned.dangling_shots, 3);
    }

    #[test]
    fn test_ace_includes_terminating_shot() {
        let scanned = scan_game(&alphabet(), "SRA", Player::One);
        assert_eq!(scanned.outcomes.len(), 1);
        let out = scanned.outcomes[0];
        assert_eq!(out.rally_length, 3);
        assert_eq!(out.event, PointEvent::Ace);
        assert_eq!(out.winner, Player::One);
        assert_eq!(out.error_by, None);
    }

    #[test]
    fn test_double_fault_credits_returner() {
        let out = scan_game(&alphabet(), "SRD", Player::One).outcomes[0];
        assert_eq!(out.winner, Player::Two);
        assert_eq!(out.error_by, Some(Player::One));
    }

    #[test]
    fn test_winner_goes_to_last_hitter() {
        // S by server, R by returner, F by server
        let out = scan_game(&alphabet(), "SRFW", Player::Two).outcomes[0];
        assert_eq!(out.winner, Player::Two);
        assert_eq!(out.rally_length, 4);

        let out = scan_game(&alphabet(), "SRW", Player::Two).outcomes[0];
        assert_eq!(out.winner, Player::One);
    }

    #[test]
    fn test_unforced_error_goes_to_opponent_of_last_hitter() {
        let out = scan_game(&alphabet(), "SRE", Player::One).outcomes[0];
        assert_eq!(out.winner, Player::One);
        assert_eq!(out.error_by, Some(Player::Two));
    }

    #[test]
    fn test_bare_terminal_treats_server_as_last_hitter() {
        let out = scan_game(&alphabet(), "W", Player::Two).outcomes[0];
        assert_eq!(out.winner, Player::Two);
        assert_eq!(out.rally_length, 1);

        let out = scan_game(&alphabet(), "E", Player::Two).outcomes[0];
        assert_eq!(out.winner, Player::One);
    }

    #[test]
    fn test_ignored_characters_do_not_count() {
        let scanned = scan_game(&alphabet(), "S.R/xA", Player::One);
        assert_eq!(scanned.outcomes[0].rally_length, 3);
    }

    #[test]
    fn test_rally_resets_between_points() {
        let scanned = scan_game(&alphabet(), "SRFBWSA", Player::One);
        assert_eq!(scanned.outcomes.len(), 2);
        assert_eq!(scanned.outcomes[0].rally_length, 5);
        assert_eq!(scanned.outcomes[1].rally_length, 2);
        assert_eq!(scanned.dangling_shots, 0);
    }

    #[test]
    fn test_dangling_shots_reported() {
        let scanned = scan_game(&alphabet(), "SASR", Player::One);
        assert_eq!(scanned.outcomes.len(), 1);
        assert_eq!(scanned.dangling_shots, 2);
    }

    #[test]
    fn test_count_points_matches_scan() {
        let a = alphabet();
        for segment in ["", "SRA", "SRFBWSAD", "SRSRSR", "AAAA"] {
            let scanned = scan_game(&a, segment, Player::One);
            assert_eq!(count_points(&a, segment), scanned.outcomes.len());
        }
    }
}
