//! Man page generation for command trees.
//!
//! `cmdman` walks a tree of [`tree::Command`] values and writes one roff
//! page per documented command into an output directory. Pages are
//! rendered from a template, either the bundled `man(7)` one or a
//! caller-supplied replacement, with escaping helpers bound as filters.
//!
//! ```no_run
//! use cmdman::config::ManConfig;
//! use cmdman::generate_man_pages;
//! use cmdman::tree::Command;
//!
//! let tree = Command::new("app")
//!     .short("Run the app.")
//!     .subcommand(Command::new("serve").short("Serve requests."));
//! let output = generate_man_pages(&tree, &ManConfig::new("target/man"))?;
//! assert_eq!(output.files.len(), 2);
//! # Ok::<(), cmdman::error::ManError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod fs_helpers;
pub mod page;
pub mod roff;
pub mod tree;
mod walk;

pub use walk::{generate_man_pages, generate_man_pages_with_clock, render_man_page};
