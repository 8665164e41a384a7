//! CLI-specific error types and mappings.
//!
//! Maps `DashboardError` to exit codes and user-facing messages.

use thiserror::Error;
use trovolio_dashboard::DashboardError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Something the user asked for does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The backend could not be reached or rejected the request.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<DashboardError> for CliError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::NotFound { .. } => Self::NotFound(err.to_string()),
            DashboardError::ValidationFailed(msg) => Self::Arguments(msg),
            DashboardError::Unavailable(msg) => Self::Unavailable(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
