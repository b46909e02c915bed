//! Help and option-state rendering.
//!
//! Both renderers return strings; printing and exiting are left to the
//! caller.

use pad::{Alignment, PadStr};

use crate::parsed::Parsed;
use crate::registry::Registry;

/// Narrowest the flag column is ever padded to
pub const MIN_FLAG_COLUMN: usize = 30;

/// Width of the flag column: the longest name plus `"  -- "`, at least
/// `MIN_FLAG_COLUMN`
pub fn flag_column_width(registry: &Registry) -> usize {
    let longest = registry
        .options()
        .iter()
        .map(|option| option.name.chars().count())
        .max()
        .unwrap_or(0);
    (longest + 5).max(MIN_FLAG_COLUMN)
}

/// One line per option, in declaration order
pub fn render_help(registry: &Registry) -> String {
    let width = flag_column_width(registry);
    registry
        .options()
        .iter()
        .map(|option| {
            let flag = format!("  --{}", option.name);
            format!(
                "{} {}\n",
                flag.pad_to_width_with_alignment(width, Alignment::Left),
                option.help
            )
        })
        .collect()
}

/// One `name supplied: yes|no => value` line per option
pub fn render_options(parsed: &Parsed) -> String {
    parsed
        .iter()
        .map(|option| {
            format!(
                "  {} supplied: {} => {}\n",
                option.name,
                if option.supplied { "yes" } else { "no" },
                option.value
            )
        })
        .collect()
}
