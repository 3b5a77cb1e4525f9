//! Loading command trees from JSON or TOML files.

use camino::Utf8Path;

use super::Command;
use crate::error::ManError;
use crate::fs_helpers::read_text_file;

/// Reads a command tree from `path`, choosing the decoder by extension.
///
/// # Errors
///
/// Returns [`ManError::Io`] when the file cannot be read and
/// [`ManError::TreeParse`] when it cannot be decoded or has an unknown
/// extension.
pub fn load_tree(path: &Utf8Path) -> Result<Command, ManError> {
    let contents = read_text_file(path)?;
    parse_tree(path, &contents)
}

fn parse_tree(path: &Utf8Path, contents: &str) -> Result<Command, ManError> {
    let parse_error = |message: String| ManError::TreeParse {
        path: path.to_path_buf(),
        message,
    };
    match path.extension() {
        Some("json") => serde_json::from_str(contents).map_err(|err| parse_error(err.to_string())),
        Some("toml") => toml::from_str(contents).map_err(|err| parse_error(err.to_string())),
        other => Err(parse_error(format!(
            "unsupported extension '{}'; expected json or toml",
            other.unwrap_or_default()
        ))),
    }
}
