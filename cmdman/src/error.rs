//! Error types for `cmdman`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the man page generation pipeline.
///
/// The first error raised anywhere in a traversal aborts the run and is
/// returned to the caller with its original cause attached as `source()`.
#[derive(Debug, Error)]
pub enum ManError {
    /// The command path resolved to an empty string, so no filename exists.
    #[error("you need a command name to have a man page")]
    MissingCommandName,

    /// Creating or writing an output file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that was being created or written.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The man page template could not be parsed.
    #[error("failed to parse man page template: {source}")]
    TemplateParse {
        /// Parser error reported by the template engine.
        #[source]
        source: tera::Error,
    },

    /// The man page template failed while rendering a command.
    #[error("failed to render man page for '{command}': {source}")]
    TemplateRender {
        /// Command path of the page being rendered.
        command: String,
        /// Execution error reported by the template engine.
        #[source]
        source: tera::Error,
    },

    /// Layered configuration could not be extracted.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A command tree file could not be decoded.
    #[error("failed to parse command tree {path}: {message}")]
    TreeParse {
        /// Path of the command tree file.
        path: Utf8PathBuf,
        /// Decoder message.
        message: String,
    },
}

impl From<figment::Error> for ManError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
