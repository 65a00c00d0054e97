//! Error types for the SQLite connection.

/// Errors that can occur while connecting or running statements.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The engine rejected a statement or the connection failed.
    ///
    /// Carries the engine's diagnostic untouched.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A configuration value from the environment could not be used.
    #[error("Invalid configuration value for {key}: {message}")]
    Config {
        /// The environment variable.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Result type for SQLite operations.
pub type Result<T> = std::result::Result<T, Error>;
