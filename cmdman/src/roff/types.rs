//! Result types for the man page generator.

use camino::Utf8PathBuf;

/// Result of generating man page(s).
#[derive(Debug, Default)]
pub struct ManOutput {
    /// Paths to generated man page files, in the order they were written.
    pub files: Vec<Utf8PathBuf>,
}

impl ManOutput {
    /// Creates a new empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a generated file path.
    pub fn add_file(&mut self, path: Utf8PathBuf) {
        self.files.push(path);
    }
}
