//! Read-only cursor over a command tree.

use std::collections::BTreeSet;

use super::{Command, Flag};

/// A command together with its chain of ancestors.
///
/// Cursors are cheap to copy and borrow both the tree and the parent cursor,
/// so a walk keeps its ancestry on the call stack.
#[derive(Debug, Clone, Copy)]
pub struct CommandRef<'a> {
    command: &'a Command,
    parent: Option<&'a CommandRef<'a>>,
}

impl<'a> CommandRef<'a> {
    /// Creates a cursor positioned on the root of a tree.
    #[must_use]
    pub const fn root(command: &'a Command) -> Self {
        Self {
            command,
            parent: None,
        }
    }

    /// Returns the command this cursor points at.
    #[must_use]
    pub const fn command(&self) -> &'a Command {
        self.command
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.command.name
    }

    /// Returns the parent cursor, if any.
    #[must_use]
    pub fn parent(&self) -> Option<CommandRef<'a>> {
        self.parent.copied()
    }

    /// Iterates over child cursors in declaration order.
    pub fn children(&self) -> impl Iterator<Item = CommandRef<'_>> {
        let parent: &CommandRef<'_> = self;
        self.command
            .subcommands
            .iter()
            .map(move |command| CommandRef {
                command,
                parent: Some(parent),
            })
    }

    /// Returns the space-separated path from the root to this command.
    #[must_use]
    pub fn path(&self) -> String {
        match self.parent {
            Some(parent) => format!("{} {}", parent.path(), self.command.name),
            None => self.command.name.clone(),
        }
    }

    /// Returns the usage line: the command path, the argument synopsis and a
    /// `[flags]` marker when documented flags exist.
    #[must_use]
    pub fn use_line(&self) -> String {
        let mut line = self.path();
        if let Some(usage) = self.command.usage.as_deref().filter(|u| !u.is_empty()) {
            line.push(' ');
            line.push_str(usage);
        }
        let has_flags = self
            .all_flags()
            .into_iter()
            .any(Flag::is_documented);
        if has_flags && !line.contains("[flags]") {
            line.push_str(" [flags]");
        }
        line
    }

    /// Flags declared on this command, sorted by name.
    #[must_use]
    pub fn own_flags(&self) -> Vec<&'a Flag> {
        let mut flags: Vec<&'a Flag> = self.command.flags.iter().collect();
        sort_by_name(&mut flags);
        flags
    }

    /// Persistent flags of ancestors that this command does not redeclare,
    /// sorted by name. The nearest ancestor wins when names clash.
    #[must_use]
    pub fn inherited_flags(&self) -> Vec<&'a Flag> {
        let mut seen: BTreeSet<&str> = self
            .command
            .flags
            .iter()
            .map(|flag| flag.name.as_str())
            .collect();
        let mut flags = Vec::new();
        let mut ancestor = self.parent;
        while let Some(node) = ancestor {
            for flag in node.command.flags.iter().filter(|f| f.persistent) {
                if seen.insert(flag.name.as_str()) {
                    flags.push(flag);
                }
            }
            ancestor = node.parent;
        }
        sort_by_name(&mut flags);
        flags
    }

    /// Own and inherited flags together, sorted by name.
    #[must_use]
    pub fn all_flags(&self) -> Vec<&'a Flag> {
        let mut flags = self.own_flags();
        flags.extend(self.inherited_flags());
        sort_by_name(&mut flags);
        flags
    }

    /// Returns `true` when both cursors point at the same tree node.
    #[must_use]
    pub fn is_same(&self, other: &CommandRef<'_>) -> bool {
        std::ptr::eq(self.command, other.command)
    }
}

fn sort_by_name(flags: &mut [&Flag]) {
    flags.sort_by(|a, b| a.name.cmp(&b.name));
}
