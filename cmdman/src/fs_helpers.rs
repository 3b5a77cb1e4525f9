//! Filesystem helpers shared across `cmdman` modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::ManError;

/// Reads `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`ManError::Io`] when the parent directory or the file cannot
/// be read.
pub fn read_text_file(path: &Utf8Path) -> Result<String, ManError> {
    let (dir, file_name) = open_parent(path)?;
    dir.read_to_string(file_name).map_err(|io_err| ManError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })
}

/// Reads `path` as UTF-8 text, returning `None` when the file is missing.
///
/// # Errors
///
/// Returns [`ManError::Io`] for any failure other than a missing file.
pub fn read_optional_text_file(path: &Utf8Path) -> Result<Option<String>, ManError> {
    let (dir, file_name) = open_parent(path)?;
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ManError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), ManError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().unwrap_or_else(|| path.as_str());
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|io_err| ManError::Io {
        path: parent.to_path_buf(),
        source: io_err,
    })?;
    Ok((dir, file_name))
}
