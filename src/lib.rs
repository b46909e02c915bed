//! unixopts parses Unix-style command-line arguments into typed options.
//!
//! This library provides functionality to:
//! - Declare integer, string and boolean options with defaults
//! - Parse `--name value`, `--name=value` and bare `--name` forms
//! - Read typed values and whether each option was supplied
//! - Render help and option-state listings
//!
//! ```
//! use unixopts::Registry;
//!
//! let mut registry = Registry::new();
//! let dryrun = registry.declare_boolean("dryrun", "Only report what would be done", true);
//! let output = registry.declare_string("output", "The path to the output folder", "");
//!
//! let parsed = unixopts::parse(&registry, ["--output=results", "--dryrun"]).unwrap();
//! assert_eq!(parsed.value(output), "results");
//! assert!(*parsed.value(dryrun));
//! ```

pub mod config;
pub mod error;
pub mod help;
pub mod parsed;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use config::{ParserConfig, RepeatPolicy};
pub use error::{ConfigError, ParseError};
pub use parsed::{Parsed, ParsedOption};
pub use parser::{is_truthy, parse, Parser};
pub use registry::{OptionSpec, Registry};
pub use types::{Handle, OptionKind, OptionType, OptionValue};
pub type Result<T> = std::result::Result<T, ParseError>;
