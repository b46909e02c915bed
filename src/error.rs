//! Error types for option parsing.
use thiserror::Error;

/// Exit status a CLI wrapper should use for a failed parse
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Outcome of a parse pass that did not produce values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// One of the help aliases was seen. Not a failure.
    #[error("help requested")]
    HelpRequested,
    /// A dash-prefixed token named no declared option
    #[error("Unknown argument: {word}")]
    UnknownOption {
        /// The word extracted from the token
        word: String,
    },
    /// An explicit value for an integer option could not be parsed
    #[error("Unable to parse number for arg: {option} (got {raw:?})")]
    InvalidIntegerValue {
        /// Name of the option being closed
        option: String,
        /// The text that was supplied
        raw: String,
    },
    /// An option was supplied more than once under `RepeatPolicy::Error`
    #[error("Argument supplied more than once: {option}")]
    RepeatedOption {
        /// Name of the repeated option
        option: String,
    },
}

impl ParseError {
    /// True for the help short-circuit
    pub fn is_help(&self) -> bool {
        matches!(self, ParseError::HelpRequested)
    }

    /// Process exit status matching this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_help() {
            0
        } else {
            FAILURE_EXIT_CODE
        }
    }
}

/// Invalid parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Help alias list contains an empty entry")]
    EmptyHelpAlias,
    #[error("Help alias must start with '-' or be \"/?\": {0}")]
    InvalidHelpAlias(String),
}
