//! Record files on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::{HexError, Result};

use super::codec::{self, Record};

/// Resolve `name` to a file under `dir`, appending `extension` unless the
/// name already ends with it.
///
/// ```
/// use std::path::Path;
/// use hexxagon::record::record_path;
///
/// let dir = Path::new("Saves");
/// assert_eq!(record_path(dir, "game", ".bin").unwrap(), dir.join("game.bin"));
/// assert_eq!(record_path(dir, "game.bin", ".bin").unwrap(), dir.join("game.bin"));
/// ```
pub fn record_path(dir: &Path, name: &str, extension: &str) -> Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name == extension {
        return Err(HexError::InvalidRecordName);
    }
    if name.ends_with(extension) {
        Ok(dir.join(name))
    } else {
        Ok(dir.join(format!("{name}{extension}")))
    }
}

/// Read and decode the record at `path`.
pub fn read_record(path: &Path) -> Result<Record> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => HexError::RecordNotFound {
            path: path.to_path_buf(),
        },
        _ => HexError::Io(err),
    })?;

    codec::decode(&text).map_err(|err| {
        tracing::warn!(path = %path.display(), error = %err, "rejected save record");
        err
    })
}

/// Encode `record` and write it to `path`, creating the parent directory.
pub fn write_record(path: &Path, record: &Record) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, codec::encode(record))?;
    tracing::info!(path = %path.display(), "saved game");
    Ok(())
}

/// Names of the records in `dir`, without extension, sorted.
///
/// A missing directory has no records.
pub fn list_records(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(stem) = file_name.strip_suffix(extension) {
            if !stem.is_empty() {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
