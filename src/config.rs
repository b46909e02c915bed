//! Parser configuration.
//!
//! This module holds the settings a `Parser` runs with: which tokens
//! request help and how an option supplied twice is resolved.

use crate::error::ConfigError;

/// The reserved help tokens
pub const DEFAULT_HELP_ALIASES: [&str; 4] = ["-h", "--help", "-?", "/?"];

/// How a second occurrence of an already closed option is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatPolicy {
    /// The later occurrence overwrites the earlier one
    #[default]
    LastWins,
    /// The first occurrence is kept, later ones are consumed and dropped
    FirstWins,
    /// A second occurrence fails the parse
    Error,
}

/// Settings for a parse pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Tokens that short-circuit parsing with a help request
    pub help_aliases: Vec<String>,
    /// Resolution for repeated options
    pub repeat_policy: RepeatPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            help_aliases: DEFAULT_HELP_ALIASES.iter().map(|s| s.to_string()).collect(),
            repeat_policy: RepeatPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Create a configuration with custom settings
    pub fn new(help_aliases: Vec<String>, repeat_policy: RepeatPolicy) -> Self {
        Self {
            help_aliases,
            repeat_policy,
        }
    }

    /// Replace the repeat policy, keeping everything else
    pub fn with_repeat_policy(mut self, repeat_policy: RepeatPolicy) -> Self {
        self.repeat_policy = repeat_policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for alias in &self.help_aliases {
            if alias.is_empty() {
                return Err(ConfigError::EmptyHelpAlias);
            }
            if !alias.starts_with('-') && alias != "/?" {
                return Err(ConfigError::InvalidHelpAlias(alias.clone()));
            }
        }
        Ok(())
    }

    /// Whether `token` is one of the help aliases
    pub fn is_help_alias(&self, token: &str) -> bool {
        self.help_aliases.iter().any(|alias| alias == token)
    }
}
