//! Error types for the Oracle adapter.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for adapter operations.
///
/// Every failure is surfaced immediately to the direct caller; no variant
/// implies a retry or partial success.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed or incomplete connection configuration.
    #[error("Invalid connection configuration: {message}")]
    Config { message: String },

    /// Native driver failure: authentication, unreachable host, protocol.
    #[error("ORA-{code:05}: {message}")]
    Driver { code: u32, message: String },

    /// Session directive rejected by the server. The connection stays open
    /// but its session state may be partially applied; callers should
    /// discard it.
    #[error("Session directive rejected ({directive}): {message}")]
    Session { directive: String, message: String },

    /// Routine call failed to parse, bind or execute, including cursor open.
    #[error("Routine {routine} failed: ORA-{code:05}: {message}")]
    Execution {
        routine: String,
        code: u32,
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a driver error.
    pub fn driver(code: u32, message: impl Into<String>) -> Self {
        Self::Driver {
            code,
            message: message.into(),
        }
    }

    /// Wrap an underlying failure as a session directive rejection.
    pub fn session(directive: impl Into<String>, source: &Error) -> Self {
        Self::Session {
            directive: directive.into(),
            message: source.to_string(),
        }
    }

    /// Wrap an underlying failure as a routine execution error.
    pub fn execution(routine: impl Into<String>, source: &Error) -> Self {
        let (code, message) = match source {
            Error::Driver { code, message } => (*code, message.clone()),
            other => (0, other.to_string()),
        };
        Self::Execution {
            routine: routine.into(),
            code,
            message,
        }
    }
}
