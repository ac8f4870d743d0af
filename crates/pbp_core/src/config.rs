//! # Analyzer Configuration
//!
//! `AnalyzerConfig` carries the notation alphabet and the leverage weights used by
//! the key-moment heuristic. Defaults match the point-by-point datasets this crate
//! was built against; a JSON file can override any subset of fields.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = AnalyzerConfig::load("configs/legacy_alphabet.json")?;
//! let analysis = analyze_match_with_config(&record, &config);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};
use tracing::warn;

pub const CONFIG_PATH_ENV: &str = "PBP_CONFIG_PATH";

// ========== AnalyzerConfig Main Structure ==========

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub alphabet: NotationAlphabet,
    #[serde(default)]
    pub leverage: LeverageWeights,
}

// ========== Notation Alphabet ==========

/// Character classes of the shot-by-shot notation.
///
/// A terminating code that also appears in `rally_codes` is classified as a rally
/// shot. Older datasets list the unforced-error code in both sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotationAlphabet {
    #[serde(default = "default_game_delimiter")]
    pub game_delimiter: char,
    /// Serve, return and generic stroke codes.
    #[serde(default = "default_rally_codes")]
    pub rally_codes: String,
    #[serde(default = "default_ace")]
    pub ace: char,
    #[serde(default = "default_double_fault")]
    pub double_fault: char,
    #[serde(default = "default_winner")]
    pub winner: char,
    #[serde(default = "default_unforced_error")]
    pub unforced_error: char,
}

fn default_game_delimiter() -> char {
    ';'
}
fn default_rally_codes() -> String {
    "SRFBV".to_string()
}
fn default_ace() -> char {
    'A'
}
fn default_double_fault() -> char {
    'D'
}
fn default_winner() -> char {
    'W'
}
fn default_unforced_error() -> char {
    'E'
}

impl Default for NotationAlphabet {
    fn default() -> Self {
        Self {
            game_delimiter: default_game_delimiter(),
            rally_codes: default_rally_codes(),
            ace: default_ace(),
            double_fault: default_double_fault(),
            winner: default_winner(),
            unforced_error: default_unforced_error(),
        }
    }
}

impl NotationAlphabet {
    pub fn terminating_codes(&self) -> [char; 4] {
        [self.ace, self.double_fault, self.winner, self.unforced_error]
    }

    /// Terminating codes shadowed by the rally set.
    pub fn shadowed_codes(&self) -> Vec<char> {
        self.terminating_codes()
            .into_iter()
            .filter(|c| self.rally_codes.contains(*c))
            .collect()
    }
}

// ========== Leverage Weights ==========

/// Weights of the key-moment leverage heuristic.
///
/// leverage = (game_point * gp + break_point * bp + deuce * dp)
///          * (recency_base + recency_span * seen / total)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverageWeights {
    #[serde(default = "default_game_point")]
    pub game_point: f64,
    #[serde(default = "default_break_point")]
    pub break_point: f64,
    #[serde(default = "default_deuce")]
    pub deuce: f64,
    #[serde(default = "default_recency_base")]
    pub recency_base: f64,
    #[serde(default = "default_recency_span")]
    pub recency_span: f64,
}

fn default_game_point() -> f64 {
    1.0
}
fn default_break_point() -> f64 {
    0.8
}
fn default_deuce() -> f64 {
    0.3
}
fn default_recency_base() -> f64 {
    0.6
}
fn default_recency_span() -> f64 {
    0.4
}

impl Default for LeverageWeights {
    fn default() -> Self {
        Self {
            game_point: default_game_point(),
            break_point: default_break_point(),
            deuce: default_deuce(),
            recency_base: default_recency_base(),
            recency_span: default_recency_span(),
        }
    }
}

// ========== AnalyzerConfig Implementation ==========

impl AnalyzerConfig {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config named by `PBP_CONFIG_PATH`, or defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let alphabet = &self.alphabet;

        if alphabet.rally_codes.is_empty() {
            return Err(ConfigError::Validation(
                "alphabet.rally_codes must not be empty".to_string(),
            ));
        }

        let delimiter = alphabet.game_delimiter;
        if alphabet.rally_codes.contains(delimiter)
            || alphabet.terminating_codes().contains(&delimiter)
        {
            return Err(ConfigError::Validation(format!(
                "alphabet.game_delimiter '{delimiter}' collides with a shot code"
            )));
        }

        let codes = alphabet.terminating_codes();
        for (i, a) in codes.iter().enumerate() {
            if codes[i + 1..].contains(a) {
                return Err(ConfigError::Validation(format!(
                    "terminating code '{a}' is assigned to more than one event"
                )));
            }
        }

        let shadowed = alphabet.shadowed_codes();
        if !shadowed.is_empty() {
            warn!(
                ?shadowed,
                "terminating codes also listed as rally codes; rally classification wins"
            );
        }

        let weights = &self.leverage;
        for (name, value) in [
            ("leverage.game_point", weights.game_point),
            ("leverage.break_point", weights.break_point),
            ("leverage.deuce", weights.deuce),
            ("leverage.recency_base", weights.recency_base),
            ("leverage.recency_span", weights.recency_span),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a finite value >= 0.0, got {value}"
                )));
            }
        }

        Ok(())
    }
}
