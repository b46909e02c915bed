//! Value coercion applied when an option is closed.

use crate::error::ParseError;
use crate::registry::OptionSpec;
use crate::types::OptionValue;

/// Lower-cased strings that read as `true`. Anything else is `false`.
pub const TRUTHY_VALUES: [&str; 10] = [
    "", "1", "yes", "y", "on", "true", "t", "enable", "enabled", "active",
];

/// Whether a boolean option's text reads as `true`
pub fn is_truthy(value: &str) -> bool {
    let lower = value.to_lowercase();
    TRUTHY_VALUES.contains(&lower.as_str())
}

/// Compute the value an option closes with.
///
/// `raw` is `None` when the flag appeared without a value. Integers and
/// strings then fall back to their default; booleans treat it as the empty
/// string and become `true`.
pub(crate) fn close_value(
    option: &OptionSpec,
    raw: Option<&str>,
) -> Result<OptionValue, ParseError> {
    match (&option.default, raw) {
        (OptionValue::Boolean(_), raw) => {
            Ok(OptionValue::Boolean(is_truthy(raw.unwrap_or(""))))
        }
        (default, None) => Ok(default.clone()),
        (OptionValue::Integer(_), Some(raw)) => raw
            .trim()
            .parse::<i32>()
            .map(OptionValue::Integer)
            .map_err(|_| ParseError::InvalidIntegerValue {
                option: option.name.clone(),
                raw: raw.to_string(),
            }),
        (OptionValue::String(_), Some(raw)) => Ok(OptionValue::String(raw.to_string())),
    }
}
