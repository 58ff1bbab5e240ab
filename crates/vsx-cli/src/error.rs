//! Error types for vsx-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from vsx-core
    #[error(transparent)]
    Core(#[from] vsx_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Message reported to the automation host.
    pub fn host_message(&self) -> String {
        match self {
            CliError::Core(e) => e.host_message(),
            other => format!("Exception Unknown : {}", other),
        }
    }
}
