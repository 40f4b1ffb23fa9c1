//! Error types for huggle-parser.
//!
//! Parsing itself never fails: missing keys and bad values fall back to
//! defaults. Errors only come from the edges, i.e. fetching a configuration
//! source, loading a YAML document, or CLI input.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for operations that touch the outside world.
#[derive(Error, Debug)]
pub enum ParserError {
    /// User provided invalid arguments or unusable input.
    #[error("{0}")]
    UserError(String),

    /// The configuration source could not be fetched.
    #[error("failed to fetch '{location}': {reason}")]
    Fetch { location: String, reason: String },

    /// The fetched text is not a YAML document.
    #[error("failed to parse YAML: {0}")]
    Yaml(String),
}

impl ParserError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParserError::UserError(_) => exit_codes::USER_ERROR,
            ParserError::Fetch { .. } => exit_codes::FETCH_FAILURE,
            ParserError::Yaml(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

impl From<serde_yaml::Error> for ParserError {
    fn from(err: serde_yaml::Error) -> Self {
        ParserError::Yaml(err.to_string())
    }
}

/// Result type alias for huggle-parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
