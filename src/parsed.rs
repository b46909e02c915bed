//! Parse results.
//!
//! A `Parsed` snapshot is produced only by a successful parse, so typed
//! values cannot be read before they exist.

use serde::Serialize;
use std::fmt;

use crate::types::{Handle, OptionKind, OptionType, OptionValue};

/// Resolved state of one option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedOption {
    /// Option name
    pub name: String,
    /// Declared type
    pub kind: OptionKind,
    /// Supplied value, or the default
    pub value: OptionValue,
    /// Whether the value came from the arguments
    pub supplied: bool,
}

/// Immutable result of a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    options: Vec<ParsedOption>,
    ignored: Vec<String>,
}

impl Parsed {
    pub(crate) fn new(options: Vec<ParsedOption>, ignored: Vec<String>) -> Self {
        Self { options, ignored }
    }

    /// Read the value behind `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was declared on a different registry than the
    /// one this snapshot was parsed from.
    pub fn value<T: OptionType>(&self, handle: Handle<T>) -> &T {
        match self.try_value(handle) {
            Some(value) => value,
            None => panic!(
                "{:?} does not belong to the registry this snapshot was parsed from",
                handle
            ),
        }
    }

    /// Read the value behind `handle`, or `None` for a foreign handle
    pub fn try_value<T: OptionType>(&self, handle: Handle<T>) -> Option<&T> {
        self.options
            .get(handle.index())
            .and_then(|option| T::from_value(&option.value))
    }

    /// Whether the option behind `handle` was supplied
    pub fn supplied<T: OptionType>(&self, handle: Handle<T>) -> bool {
        self.options
            .get(handle.index())
            .is_some_and(|option| option.supplied)
    }

    /// Look up an option by name; the first declared wins
    pub fn get(&self, name: &str) -> Option<&ParsedOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// All options in declaration order
    pub fn options(&self) -> &[ParsedOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedOption> {
        self.options.iter()
    }

    /// Bare arguments that had no open option to bind to
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}

impl<'a> IntoIterator for &'a Parsed {
    type Item = &'a ParsedOption;
    type IntoIter = std::slice::Iter<'a, ParsedOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::help::render_options(self))
    }
}
