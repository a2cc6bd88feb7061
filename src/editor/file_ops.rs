//! File operations for the editor.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Expand ~ to home directory and resolve path
pub fn expand_path(path_str: &str) -> PathBuf {
    match path_str.starts_with('~') {
        true => match dirs::home_dir() {
            Some(home) => match path_str {
                "~" => home,
                _ => match path_str.strip_prefix("~/") {
                    Some(rest) => home.join(rest),
                    None => PathBuf::from(path_str),
                },
            },
            None => PathBuf::from(path_str),
        },
        false => PathBuf::from(path_str),
    }
}

/// Read the startup document.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Write the document verbatim, creating or truncating `path`.
///
/// New files get mode `0o644` on unix.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}
