//! Template-ready page models.
//!
//! [`build_page_model`] resolves everything a template needs for one
//! command: header defaults, flag lists, cross-references and the optional
//! sections whose text may come from a command annotation or from the
//! run-wide configuration.

mod flags;
mod see_also;

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::config::{ManConfig, non_empty};
use crate::error::ManError;
use crate::tree::{
    ArgumentPolicy, BUGS_ANNOTATION, Command, CommandRef, ENVIRONMENT_ANNOTATION,
    EXAMPLES_ANNOTATION, FILES_ANNOTATION,
};

pub use flags::FlagEntry;
pub use see_also::{SeeAlsoEntry, see_also_entries};

/// Everything the man page template can reference for one command.
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    /// Page date.
    pub date: DateTime<Utc>,
    /// Manual section.
    pub section: String,
    /// Center footer text.
    pub center_footer: String,
    /// Left footer text.
    pub left_footer: String,
    /// Center header text.
    pub center_header: String,
    /// Usage line shown in SYNOPSIS.
    pub use_line: String,
    /// Space-separated command path.
    pub command_path: String,
    /// One-line description.
    pub short_description: String,
    /// Long description, or the short one when no long text exists.
    pub description: String,
    /// Whether the command rejects positional arguments.
    pub no_args: bool,
    /// Own and inherited flags.
    pub all_flags: Vec<FlagEntry>,
    /// Flags inherited from ancestors.
    pub inherited_flags: Vec<FlagEntry>,
    /// Flags declared on the command itself.
    pub non_inherited_flags: Vec<FlagEntry>,
    /// Related pages.
    pub see_alsos: Vec<SeeAlsoEntry>,
    /// Paths of documented subcommands.
    pub sub_commands: Vec<String>,
    /// AUTHOR section text, empty when not configured.
    pub author: String,
    /// ENVIRONMENT section text.
    pub environment: Option<String>,
    /// FILES section text.
    pub files: Option<String>,
    /// BUGS section text.
    pub bugs: Option<String>,
    /// EXAMPLES section text.
    pub examples: Option<String>,
}

/// Builds the page model for `node`.
///
/// # Errors
///
/// Returns [`ManError::MissingCommandName`] when the command path is empty.
pub fn build_page_model(
    node: &CommandRef<'_>,
    config: &ManConfig,
    clock: &dyn Clock,
) -> Result<PageModel, ManError> {
    let command_path = node.path();
    if command_path.is_empty() {
        return Err(ManError::MissingCommandName);
    }
    let command = node.command();

    let date = config.date.map_or_else(
        || clock.now(),
        |day| day.and_time(NaiveTime::MIN).and_utc(),
    );
    let center_footer = non_empty(config.center_footer.as_deref())
        .map_or_else(|| date.format("%b %Y").to_string(), str::to_owned);

    Ok(PageModel {
        date,
        section: config.section().to_owned(),
        center_footer,
        left_footer: config.left_footer.clone().unwrap_or_default(),
        center_header: config.center_header.clone().unwrap_or_default(),
        use_line: node.use_line(),
        short_description: command.short.clone(),
        description: resolve_description(command),
        no_args: command.args == ArgumentPolicy::None,
        all_flags: flags::flag_entries(&node.all_flags()),
        inherited_flags: flags::flag_entries(&node.inherited_flags()),
        non_inherited_flags: flags::flag_entries(&node.own_flags()),
        see_alsos: see_also_entries(node, config),
        sub_commands: node
            .children()
            .filter(|child| child.command().is_documented())
            .map(|child| child.path())
            .collect(),
        author: config.author.clone().unwrap_or_default(),
        environment: resolve_section(
            command,
            ENVIRONMENT_ANNOTATION,
            config.environment.as_deref(),
        ),
        files: resolve_section(command, FILES_ANNOTATION, config.files.as_deref()),
        bugs: resolve_section(command, BUGS_ANNOTATION, config.bugs.as_deref()),
        examples: resolve_section(command, EXAMPLES_ANNOTATION, Some(&command.example)),
        command_path,
    })
}

fn resolve_description(command: &Command) -> String {
    if command.long.is_empty() {
        command.short.clone()
    } else {
        command.long.clone()
    }
}

/// A non-empty annotation wins over a non-empty fallback; with neither the
/// section is omitted.
fn resolve_section(command: &Command, annotation: &str, fallback: Option<&str>) -> Option<String> {
    non_empty(command.annotation_value(annotation))
        .or_else(|| non_empty(fallback))
        .map(str::to_owned)
}
