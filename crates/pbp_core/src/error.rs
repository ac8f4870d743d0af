use thiserror::Error;

/// Failures surfaced at the analysis boundary.
///
/// The decode path itself never fails: malformed segments, unknown characters
/// and empty notation are all represented as data in the result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Malformed input: missing required field '{field}'")]
    MalformedInput { field: String },

    #[error("Malformed input: field '{field}' has invalid value '{value}'")]
    InvalidField { field: String, value: String },

    #[error("Match not found: index {index} (dataset has {available} matches)")]
    MatchNotFound { index: usize, available: usize },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn missing(field: &str) -> Self {
        AnalysisError::MalformedInput { field: field.to_string() }
    }

    pub fn invalid(field: &str, value: impl Into<String>) -> Self {
        AnalysisError::InvalidField { field: field.to_string(), value: value.into() }
    }

    /// Caller asked for something that does not exist, as opposed to sending bad data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalysisError::MatchNotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
