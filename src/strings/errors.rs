//! Error types for the fallible edges of the crate
//!
//! The string operations themselves never fail. Errors only arise while
//! loading token tables or handling command-line arguments.

use std::fmt;
use std::io;

/// Errors raised while configuring or driving the string helpers
#[derive(Debug)]
pub enum StrError {
    /// I/O error
    IoError(io::Error),
    /// Configuration text could not be parsed or is missing a field
    InvalidConfig(String),
    /// A truthy token is empty, non-ASCII or contains whitespace
    InvalidToken(String),
    /// A command-line argument has the wrong shape
    InvalidArgument(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for StrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrError::IoError(e) => write!(f, "I/O error: {}", e),
            StrError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            StrError::InvalidToken(token) => write!(f, "Invalid truthy token: {:?}", token),
            StrError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            StrError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StrError {
    fn from(error: io::Error) -> Self {
        StrError::IoError(error)
    }
}

impl From<String> for StrError {
    fn from(msg: String) -> Self {
        StrError::GenericError(msg)
    }
}

/// Result type for configuration and CLI operations
pub type StrResult<T> = Result<T, StrError>;
