//! Token classification.
//!
//! Every argument falls into exactly one class. Help aliases are checked
//! first and by exact match, so `-h` never reaches the flag path.

use crate::config::ParserConfig;

/// One classified argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A reserved help alias
    Help,
    /// A dash-prefixed flag
    Flag {
        /// Name with the dash run stripped, cut at the first `=` or space
        word: &'a str,
        /// Everything after `word=` for the joined form
        joined: Option<&'a str>,
    },
    /// A dash-prefixed token with nothing usable after the dashes
    EmptyFlag,
    /// Anything that does not start with a dash
    Value(&'a str),
}

pub(crate) fn classify<'a>(arg: &'a str, config: &ParserConfig) -> Token<'a> {
    if config.is_help_alias(arg) {
        return Token::Help;
    }
    if !arg.starts_with('-') {
        return Token::Value(arg);
    }

    let word = flag_word(arg);
    if word.is_empty() {
        return Token::EmptyFlag;
    }

    Token::Flag {
        word,
        joined: joined_value(arg, word),
    }
}

/// Strip the leading dash run and cut at the first `=` or space
fn flag_word(arg: &str) -> &str {
    let rest = arg.trim_start_matches('-');
    let end = rest.find(['=', ' ']).unwrap_or(rest.len());
    &rest[..end]
}

/// The text after the first literal `word=` in `arg`, if any
fn joined_value<'a>(arg: &'a str, word: &str) -> Option<&'a str> {
    let needle = format!("{}=", word);
    arg.find(&needle).map(|pos| &arg[pos + needle.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(arg: &str) -> Token<'_> {
        classify(arg, &ParserConfig::default())
    }

    #[test]
    fn test_help_aliases() {
        for arg in ["-h", "--help", "-?", "/?"] {
            assert_eq!(classify_default(arg), Token::Help);
        }
        // Only exact matches are help.
        assert_eq!(
            classify_default("--help=yes"),
            Token::Flag {
                word: "help",
                joined: Some("yes")
            }
        );
    }

    #[test]
    fn test_dash_runs() {
        for arg in ["-test", "--test", "---test"] {
            assert_eq!(
                classify_default(arg),
                Token::Flag {
                    word: "test",
                    joined: None
                }
            );
        }
    }

    #[test]
    fn test_joined_form() {
        assert_eq!(
            classify_default("--bar=dar"),
            Token::Flag {
                word: "bar",
                joined: Some("dar")
            }
        );
        assert_eq!(
            classify_default("--output=test foo bar"),
            Token::Flag {
                word: "output",
                joined: Some("test foo bar")
            }
        );
        assert_eq!(
            classify_default("--eq=a=b"),
            Token::Flag {
                word: "eq",
                joined: Some("a=b")
            }
        );
        assert_eq!(
            classify_default("--empty="),
            Token::Flag {
                word: "empty",
                joined: Some("")
            }
        );
    }

    #[test]
    fn test_word_stops_at_space() {
        assert_eq!(
            classify_default("--out put"),
            Token::Flag {
                word: "out",
                joined: None
            }
        );
    }

    #[test]
    fn test_empty_flags_and_values() {
        assert_eq!(classify_default("-"), Token::EmptyFlag);
        assert_eq!(classify_default("--"), Token::EmptyFlag);
        assert_eq!(classify_default("--=x"), Token::EmptyFlag);
        assert_eq!(classify_default("value"), Token::Value("value"));
        assert_eq!(classify_default(""), Token::Value(""));
        assert_eq!(classify_default("/x"), Token::Value("/x"));
    }
}
