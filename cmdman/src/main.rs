//! CLI entrypoint for `cmdman`.

mod cli;

use clap::Parser;
use cmdman::config::{ConfigOverrides, load_config};
use cmdman::error::ManError;
use cmdman::fs_helpers::read_text_file;
use cmdman::generate_man_pages;
use cmdman::tree::load_tree;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> Result<(), ManError> {
    init_tracing();
    run()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ManError> {
    let args = Args::parse();
    let overrides = build_overrides(&args)?;
    let config = load_config(args.config.as_deref(), &overrides)?;
    let tree = load_tree(&args.tree)?;

    let output = generate_man_pages(&tree, &config)?;
    tracing::info!(
        pages = output.files.len(),
        out_dir = %config.out_dir,
        "generated man pages"
    );
    Ok(())
}

fn build_overrides(args: &Args) -> Result<ConfigOverrides, ManError> {
    let template = args
        .template
        .as_deref()
        .map(read_text_file)
        .transpose()?;
    Ok(ConfigOverrides {
        section: args.section.clone(),
        center_footer: args.center_footer.clone(),
        date: args.date,
        left_footer: args.left_footer.clone(),
        center_header: args.center_header.clone(),
        files: args.files.clone(),
        bugs: args.bugs.clone(),
        environment: args.environment.clone(),
        author: args.author.clone(),
        out_dir: args.out_dir.as_ref().map(ToString::to_string),
        command_separator: args.separator.clone(),
        template,
    })
}
