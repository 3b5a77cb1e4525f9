//! Flag entries shown in the OPTIONS sections.

use serde::Serialize;

use crate::tree::{ARG_HINTS_ANNOTATION, Flag};

/// A documented flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagEntry {
    /// Shorthand letter, absent when missing or deprecated on its own.
    pub shorthand: Option<char>,
    /// Long name.
    pub name: String,
    /// Value used when the flag is given without an argument.
    pub no_opt_default_value: String,
    /// Default value.
    pub default_value: String,
    /// Help text.
    pub usage: String,
    /// Argument placeholder from the `man-arg-hints` annotation.
    pub arg_hint: Option<String>,
}

impl From<&Flag> for FlagEntry {
    fn from(flag: &Flag) -> Self {
        Self {
            shorthand: flag.shorthand.filter(|_| flag.shorthand_deprecated.is_none()),
            name: flag.name.clone(),
            no_opt_default_value: flag.no_opt_default_value.clone(),
            default_value: flag.default_value.clone(),
            usage: flag.usage.clone(),
            arg_hint: flag.annotation_value(ARG_HINTS_ANNOTATION).map(str::to_owned),
        }
    }
}

/// Builds entries for the documented flags, keeping their order.
pub(crate) fn flag_entries(flags: &[&Flag]) -> Vec<FlagEntry> {
    flags
        .iter()
        .copied()
        .filter(|flag| flag.is_documented())
        .map(FlagEntry::from)
        .collect()
}
