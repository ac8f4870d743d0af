//! Typed match record validated once at the input boundary.
//!
//! Upstream loaders hand over loosely-typed rows (CSV columns, JSON objects).
//! Required keys must be present; `pbp` and `wh_minutes` may be absent or blank.

use super::player::Player;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const FIELD_PBP: &str = "pbp";
pub const FIELD_SERVER1: &str = "server1";
pub const FIELD_SERVER2: &str = "server2";
pub const FIELD_WINNER: &str = "winner";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TOURNAMENT: &str = "tny_name";
pub const FIELD_SCORE: &str = "score";
pub const FIELD_MINUTES: &str = "wh_minutes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub tny_name: String,
    pub date: String,
    pub server1: String,
    pub server2: String,
    pub winner: Player,
    pub score: String,
    pub wh_minutes: Option<u32>,
    #[serde(default)]
    pub pbp: String,
}

impl MatchRecord {
    /// Build from a column-name → value row.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let required = |name: &str| -> Result<String> {
            fields
                .get(name)
                .map(|v| v.trim().to_string())
                .ok_or_else(|| AnalysisError::missing(name))
        };

        let winner_raw = required(FIELD_WINNER)?;
        let winner = winner_raw
            .parse::<u8>()
            .ok()
            .and_then(|n| Player::try_from(n).ok())
            .ok_or_else(|| AnalysisError::invalid(FIELD_WINNER, winner_raw.as_str()))?;

        let minutes_raw = required(FIELD_MINUTES)?;
        let wh_minutes = if minutes_raw.is_empty() {
            None
        } else {
            Some(
                minutes_raw
                    .parse::<u32>()
                    .map_err(|_| AnalysisError::invalid(FIELD_MINUTES, minutes_raw.as_str()))?,
            )
        };

        Ok(Self {
            tny_name: required(FIELD_TOURNAMENT)?,
            date: required(FIELD_DATE)?,
            server1: required(FIELD_SERVER1)?,
            server2: required(FIELD_SERVER2)?,
            winner,
            score: required(FIELD_SCORE)?,
            wh_minutes,
            pbp: fields.get(FIELD_PBP).map(|v| v.trim().to_string()).unwrap_or_default(),
        })
    }

    /// Build from a flat JSON object. Numbers are accepted where strings are expected; `null`
    /// counts as a blank value.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let fields = raw
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();
        Self::from_fields(&fields)
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.server1,
            Player::Two => &self.server2,
        }
    }

    pub fn has_notation(&self) -> bool {
        !self.pbp.is_empty()
    }
}
