//! Man page file writer using `cap_std` for filesystem operations.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::ManError;

/// Writes man page content to `<out_dir>/<filename>`, replacing any
/// existing file.
///
/// The output directory is created when missing. The file handle is closed
/// when this function returns, whether or not the write succeeded.
///
/// # Errors
///
/// Returns [`ManError::Io`] if the directory or file cannot be created or
/// the content cannot be written.
pub fn write_man_page(
    out_dir: &Utf8Path,
    filename: &str,
    content: &str,
) -> Result<Utf8PathBuf, ManError> {
    let dir = ensure_dir(out_dir)?;
    let file_path = out_dir.join(filename);

    let mut file = dir
        .open_with(
            filename,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| ManError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    file.write_all(content.as_bytes())
        .map_err(|io_err| ManError::Io {
            path: file_path.clone(),
            source: io_err,
        })?;

    Ok(file_path)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, ManError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                ManError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| ManError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(ManError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}
