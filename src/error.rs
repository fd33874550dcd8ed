//! Error types for the league table
//!
//! Fallible operations return the anyhow-based [`Result`] alias; the typed
//! [`LeagueError`] variants can be recovered with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific league scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    #[error("Invalid roster: duplicate team name '{name}'")]
    InvalidRoster { name: String },

    #[error("Unknown participant: {name}")]
    UnknownParticipant { name: String },

    #[error("Invalid match result '{input}': {reason}")]
    InvalidMatchResult { input: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
