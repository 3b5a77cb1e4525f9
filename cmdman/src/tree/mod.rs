//! Command tree consumed by the man page generator.
//!
//! A [`Command`] is an owned, read-only description of one command and its
//! subcommands. The generator never mutates the tree; it walks it through
//! [`CommandRef`] cursors that remember their ancestry.

mod clap_bridge;
mod load;
mod node;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use load::load_tree;
pub use node::CommandRef;

/// Per-command and per-flag string overrides, keyed by annotation name.
pub type Annotations = BTreeMap<String, Vec<String>>;

/// Annotation overriding the ENVIRONMENT section of one command.
pub const ENVIRONMENT_ANNOTATION: &str = "man-environment-section";
/// Annotation overriding the FILES section of one command.
pub const FILES_ANNOTATION: &str = "man-files-section";
/// Annotation overriding the BUGS section of one command.
pub const BUGS_ANNOTATION: &str = "man-bugs-section";
/// Annotation overriding the EXAMPLES section of one command.
pub const EXAMPLES_ANNOTATION: &str = "man-examples-section";
/// Flag annotation naming the argument placeholder shown in OPTIONS.
pub const ARG_HINTS_ANNOTATION: &str = "man-arg-hints";

/// Positional argument policy declared when the command is defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentPolicy {
    /// The command rejects every positional argument.
    None,
    /// The command accepts any positional arguments.
    #[default]
    Any,
    /// The command validates positional arguments with its own rules.
    Custom,
}

/// A single command in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Command {
    /// Command name as typed on the command line.
    pub name: String,
    /// Argument synopsis following the command path (for example `FILE...`).
    pub usage: Option<String>,
    /// One-line description.
    pub short: String,
    /// Long description.
    pub long: String,
    /// Example invocations.
    pub example: String,
    /// Positional argument policy.
    pub args: ArgumentPolicy,
    /// Hidden commands are left out of help and documentation.
    pub hidden: bool,
    /// Deprecation message; deprecated commands are not documented.
    pub deprecated: Option<String>,
    /// Documentation-only pseudo-command without executable behaviour.
    pub help_topic: bool,
    /// Per-command overrides.
    pub annotations: Annotations,
    /// Flags declared on this command.
    pub flags: Vec<Flag>,
    /// Child commands in declaration order.
    pub subcommands: Vec<Command>,
}

impl Command {
    /// Creates a command with the given name and default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the argument synopsis.
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Sets the one-line description.
    #[must_use]
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    /// Sets the example text.
    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Sets the positional argument policy.
    #[must_use]
    pub fn args(mut self, policy: ArgumentPolicy) -> Self {
        self.args = policy;
        self
    }

    /// Marks the command as hidden.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Marks the command as deprecated with the given message.
    #[must_use]
    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    /// Marks the command as an additional help topic.
    #[must_use]
    pub fn help_topic(mut self, help_topic: bool) -> Self {
        self.help_topic = help_topic;
        self
    }

    /// Appends a value to the annotation `key`.
    #[must_use]
    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Declares a flag on this command.
    #[must_use]
    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Appends a child command.
    #[must_use]
    pub fn subcommand(mut self, command: Self) -> Self {
        self.subcommands.push(command);
        self
    }

    /// Returns `true` unless the command is hidden or deprecated.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.hidden && self.deprecated.is_none()
    }

    /// Returns `true` when the command gets its own man page.
    #[must_use]
    pub const fn is_documented(&self) -> bool {
        self.is_available() && !self.help_topic
    }

    /// Returns the first value of annotation `key`, if any.
    #[must_use]
    pub fn annotation_value(&self, key: &str) -> Option<&str> {
        first_value(&self.annotations, key)
    }
}

/// A flag declared on a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Flag {
    /// Long name without leading dashes.
    pub name: String,
    /// Single-letter shorthand.
    pub shorthand: Option<char>,
    /// Deprecation message for the shorthand alone.
    pub shorthand_deprecated: Option<String>,
    /// Deprecation message for the flag.
    pub deprecated: Option<String>,
    /// Hidden flags are left out of documentation.
    pub hidden: bool,
    /// Persistent flags are inherited by every descendant command.
    pub persistent: bool,
    /// Help text.
    pub usage: String,
    /// Default value rendered as text.
    pub default_value: String,
    /// Value used when the flag is given without an argument.
    pub no_opt_default_value: String,
    /// Per-flag overrides.
    pub annotations: Annotations,
}

impl Flag {
    /// Creates a flag with the given long name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the shorthand letter.
    #[must_use]
    pub fn shorthand(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Deprecates the shorthand while keeping the long form.
    #[must_use]
    pub fn shorthand_deprecated(mut self, message: impl Into<String>) -> Self {
        self.shorthand_deprecated = Some(message.into());
        self
    }

    /// Deprecates the flag.
    #[must_use]
    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = Some(message.into());
        self
    }

    /// Hides the flag.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Makes the flag visible to descendant commands.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Sets the value used when the flag has no argument.
    #[must_use]
    pub fn no_opt_default_value(mut self, value: impl Into<String>) -> Self {
        self.no_opt_default_value = value.into();
        self
    }

    /// Appends a value to the annotation `key`.
    #[must_use]
    pub fn annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns `true` when the flag belongs in generated documentation.
    #[must_use]
    pub const fn is_documented(&self) -> bool {
        !self.hidden && self.deprecated.is_none()
    }

    /// Returns the first value of annotation `key`, if any.
    #[must_use]
    pub fn annotation_value(&self, key: &str) -> Option<&str> {
        first_value(&self.annotations, key)
    }
}

fn first_value<'a>(annotations: &'a Annotations, key: &str) -> Option<&'a str> {
    annotations
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}
