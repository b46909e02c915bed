//! Argument parsing.
//!
//! The parser walks the argument vector once, carrying at most one *open*
//! option: the last matched flag that may still take the next token as
//! its value. Syntax that is accepted:
//! - `-test`, `--test`
//! - `--test=x`, `--test="x"` (quotes are the shell's business)
//! - `--test x`
//!
//! A flag followed by another flag, or by nothing, is closed without a
//! value.

mod coerce;
mod token;

pub use coerce::{is_truthy, TRUTHY_VALUES};

use crate::config::{ParserConfig, RepeatPolicy};
use crate::error::{ConfigError, ParseError};
use crate::parsed::{Parsed, ParsedOption};
use crate::registry::Registry;
use crate::types::OptionValue;
use crate::Result;
use token::Token;
use tracing::{debug, trace, warn};

/// Parses argument vectors against a `Registry`
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a validated custom configuration
    pub fn with_config(config: ParserConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `args` (without the program name) against `registry`.
    ///
    /// Every call starts from a clean slate, so the same registry can be
    /// parsed any number of times. Fails fast on the first error.
    pub fn parse<I, S>(&self, registry: &Registry, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pass = Pass::new(registry, self.config.repeat_policy);

        for arg in args {
            let arg = arg.as_ref();
            let token = token::classify(arg, &self.config);
            trace!("Token {:?} => {:?}", arg, token);

            match token {
                Token::Help => {
                    debug!("Help requested via {:?}", arg);
                    return Err(ParseError::HelpRequested);
                }
                Token::Flag { word, joined } => {
                    pass.close_open()?;
                    let index = registry
                        .find(word)
                        .ok_or_else(|| ParseError::UnknownOption {
                            word: word.to_string(),
                        })?;
                    match joined {
                        Some(value) => pass.close(index, Some(value))?,
                        None => pass.open(index),
                    }
                }
                Token::EmptyFlag => pass.close_open()?,
                Token::Value(value) => match pass.open.take() {
                    Some(index) => pass.close(index, Some(value))?,
                    None => pass.ignore(value),
                },
            }
        }

        pass.close_open()?;
        Ok(pass.finish())
    }
}

/// Parse with the default configuration
pub fn parse<I, S>(registry: &Registry, args: I) -> Result<Parsed>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new().parse(registry, args)
}

/// State for one walk over the arguments
struct Pass<'r> {
    registry: &'r Registry,
    repeat_policy: RepeatPolicy,
    /// Closed values by declaration index; `Some` means supplied
    supplied: Vec<Option<OptionValue>>,
    open: Option<usize>,
    ignored: Vec<String>,
}

impl<'r> Pass<'r> {
    fn new(registry: &'r Registry, repeat_policy: RepeatPolicy) -> Self {
        Self {
            registry,
            repeat_policy,
            supplied: vec![None; registry.len()],
            open: None,
            ignored: Vec::new(),
        }
    }

    fn open(&mut self, index: usize) {
        debug!("Opened option {}", self.name(index));
        self.open = Some(index);
    }

    /// Close the open option, if any, as a value-less flag
    fn close_open(&mut self) -> Result<()> {
        match self.open.take() {
            Some(index) => self.close(index, None),
            None => Ok(()),
        }
    }

    /// Close the option at `index`, which always comes from `Registry::find`
    fn close(&mut self, index: usize, raw: Option<&str>) -> Result<()> {
        let registry = self.registry;
        let option = &registry.options()[index];
        // Repeated values are still validated, whatever the policy keeps.
        let value = coerce::close_value(option, raw)?;

        if self.supplied[index].is_some() {
            match self.repeat_policy {
                RepeatPolicy::LastWins => {
                    debug!("Option {} supplied again, overwriting", option.name)
                }
                RepeatPolicy::FirstWins => {
                    debug!("Option {} supplied again, keeping first", option.name);
                    return Ok(());
                }
                RepeatPolicy::Error => {
                    return Err(ParseError::RepeatedOption {
                        option: option.name.clone(),
                    });
                }
            }
        }

        debug!("Closed option {} with {:?} => {}", option.name, raw, value);
        self.supplied[index] = Some(value);
        Ok(())
    }

    fn ignore(&mut self, value: &str) {
        warn!("Ignoring argument with no option to bind to: {:?}", value);
        self.ignored.push(value.to_string());
    }

    fn name(&self, index: usize) -> &str {
        &self.registry.options()[index].name
    }

    /// Fill defaults for everything not supplied and build the snapshot
    fn finish(self) -> Parsed {
        let options = self
            .registry
            .options()
            .iter()
            .zip(self.supplied)
            .map(|(option, supplied)| {
                let (value, supplied) = match supplied {
                    Some(value) => (value, true),
                    None => (option.default.clone(), false),
                };
                ParsedOption {
                    name: option.name.clone(),
                    kind: option.kind(),
                    value,
                    supplied,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Parsed {} options, {} supplied",
            options.len(),
            options.iter().filter(|o| o.supplied).count()
        );
        Parsed::new(options, self.ignored)
    }
}
