//! Tree traversal that writes one man page per documented command.

use crate::clock::{Clock, SystemClock};
use crate::config::ManConfig;
use crate::error::ManError;
use crate::page::build_page_model;
use crate::roff::{ManOutput, ManRenderer, write_man_page};
use crate::tree::{Command, CommandRef};

/// Generates man pages for `root` and every documented descendant.
///
/// Pages are dated with the system clock unless `config.date` is set.
///
/// # Errors
///
/// Returns the first error raised while parsing the template, building a
/// page, rendering it, or writing it to disk. Files written before the
/// failure are left in place.
pub fn generate_man_pages(root: &Command, config: &ManConfig) -> Result<ManOutput, ManError> {
    generate_man_pages_with_clock(root, config, &SystemClock)
}

/// Generates man pages like [`generate_man_pages`], reading the current
/// time from `clock`.
///
/// Children are written before their parent. Hidden, deprecated and help
/// topic commands are skipped together with their whole subtree. An
/// unnamed root is rejected before any page is written.
///
/// # Errors
///
/// See [`generate_man_pages`].
pub fn generate_man_pages_with_clock(
    root: &Command,
    config: &ManConfig,
    clock: &dyn Clock,
) -> Result<ManOutput, ManError> {
    if root.name.is_empty() {
        return Err(ManError::MissingCommandName);
    }
    let renderer = ManRenderer::new(&config.template_source())?;
    let generator = Generator {
        config,
        clock,
        renderer: &renderer,
    };
    let mut output = ManOutput::new();

    let node = CommandRef::root(root);
    if root.is_documented() {
        generator.visit(&node, &mut output)?;
    } else {
        tracing::debug!(command = %node.path(), "root command is not documented");
    }
    Ok(output)
}

/// Renders the page for `command` as a standalone root, without touching
/// the filesystem.
///
/// # Errors
///
/// Returns [`ManError::MissingCommandName`] for an unnamed command, or a
/// template error.
pub fn render_man_page(command: &Command, config: &ManConfig) -> Result<String, ManError> {
    let renderer = ManRenderer::new(&config.template_source())?;
    let page = build_page_model(&CommandRef::root(command), config, &SystemClock)?;
    renderer.render(&page)
}

struct Generator<'a> {
    config: &'a ManConfig,
    clock: &'a dyn Clock,
    renderer: &'a ManRenderer,
}

impl Generator<'_> {
    fn visit(&self, node: &CommandRef<'_>, output: &mut ManOutput) -> Result<(), ManError> {
        for child in node.children() {
            if child.command().is_documented() {
                self.visit(&child, output)?;
            } else {
                tracing::debug!(command = %child.path(), "skipping undocumented command");
            }
        }
        self.write_page(node, output)
    }

    fn write_page(&self, node: &CommandRef<'_>, output: &mut ManOutput) -> Result<(), ManError> {
        let page = build_page_model(node, self.config, self.clock)?;
        let basename = self
            .config
            .page_basename(&page.command_path)
            .ok_or(ManError::MissingCommandName)?;
        let filename = format!("{basename}.{}", page.section);
        let content = self.renderer.render(&page)?;

        let path = write_man_page(&self.config.out_dir, &filename, &content)?;
        tracing::info!(command = %page.command_path, path = %path, "wrote man page");
        output.add_file(path);
        Ok(())
    }
}
