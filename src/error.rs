use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to TheMealDB
#[derive(Error, Debug)]
pub enum MealDbError {
    /// Network failure, timeout or connection error
    #[error("Failed to reach the recipe API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Recipe API returned status {0}")]
    Status(StatusCode),

    /// The body could not be decoded or had an unexpected shape
    #[error("Malformed recipe API response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl MealDbError {
    /// True for failures of the outbound request itself.
    ///
    /// Malformed payloads count as transport failures: callers degrade both
    /// the same way.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            MealDbError::Transport(_) | MealDbError::Status(_) | MealDbError::MalformedResponse(_)
        )
    }
}
