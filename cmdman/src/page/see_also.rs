//! SEE ALSO cross-references.

use serde::Serialize;

use crate::config::ManConfig;
use crate::tree::CommandRef;

/// A link to a related command's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeeAlsoEntry {
    /// Space-separated command path.
    pub command_path: String,
    /// Basename of the linked page file.
    pub page_name: String,
    /// Manual section of the linked page.
    pub section: String,
}

/// Lists the parent, then siblings sorted by name, then children sorted by
/// name. Siblings and children that are unavailable or help topics are
/// left out, as is the command itself.
pub fn see_also_entries(node: &CommandRef<'_>, config: &ManConfig) -> Vec<SeeAlsoEntry> {
    let mut entries = Vec::new();
    if let Some(parent) = node.parent() {
        entries.push(see_also_entry(&parent, config));
        entries.extend(
            sorted_children(&parent)
                .iter()
                .filter(|sibling| !sibling.is_same(node))
                .map(|sibling| see_also_entry(sibling, config)),
        );
    }
    entries.extend(
        sorted_children(node)
            .iter()
            .map(|child| see_also_entry(child, config)),
    );
    entries
}

fn see_also_entry(related: &CommandRef<'_>, config: &ManConfig) -> SeeAlsoEntry {
    let command_path = related.path();
    SeeAlsoEntry {
        page_name: config.page_basename(&command_path).unwrap_or_default(),
        command_path,
        section: config.section().to_owned(),
    }
}

fn sorted_children<'a>(node: &'a CommandRef<'_>) -> Vec<CommandRef<'a>> {
    let mut children: Vec<CommandRef<'a>> = node
        .children()
        .filter(|child| child.command().is_documented())
        .collect();
    children.sort_by(|a, b| a.name().cmp(b.name()));
    children
}
