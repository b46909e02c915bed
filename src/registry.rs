//! Option registry.
//!
//! Holds the declared options in insertion order. Declaring returns a
//! typed `Handle` that is only readable from the `Parsed` snapshot a
//! successful parse produces.

use crate::types::{Handle, OptionKind, OptionType, OptionValue};

/// A declared option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// Flag name without leading dashes
    pub name: String,
    /// Shows up in the help listing
    pub help: String,
    /// Value used when the option is not supplied
    pub default: OptionValue,
}

impl OptionSpec {
    pub fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}

/// Ordered collection of declared options
#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: Vec<OptionSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an integer option
    pub fn declare_integer(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: i32,
    ) -> Handle<i32> {
        self.declare(name, help, default)
    }

    /// Declare a string option
    pub fn declare_string(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: impl Into<String>,
    ) -> Handle<String> {
        self.declare(name, help, default.into())
    }

    /// Declare a boolean option
    pub fn declare_boolean(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: bool,
    ) -> Handle<bool> {
        self.declare(name, help, default)
    }

    /// Declare an option of any supported type
    pub fn declare<T: OptionType>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        default: T,
    ) -> Handle<T> {
        let name = name.into();
        if self.find(&name).is_some() {
            // Matching is first-wins, so this one can never be supplied.
            tracing::warn!("Option declared more than once: {}", name);
        }

        let index = self.options.len();
        tracing::debug!("Declared {:?} option '{}' at {}", T::KIND, name, index);
        self.options.push(OptionSpec {
            name,
            help: help.into(),
            default: default.into_value(),
        });

        Handle::new(index)
    }

    /// Find the first option declared with `word` as its name
    pub fn find(&self, word: &str) -> Option<usize> {
        self.options.iter().position(|option| option.name == word)
    }

    /// Get an option by position
    pub fn get(&self, index: usize) -> Option<&OptionSpec> {
        self.options.get(index)
    }

    /// Get all options in declaration order
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
