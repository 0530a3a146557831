//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt an existing ledger file
//! when a write fails partway.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Open a file for buffered reading
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, TrackerError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| TrackerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    Ok(BufReader::new(file))
}

/// Write a file atomically (write to temp, then rename)
///
/// The closure receives a buffered writer over the temp file. The target is
/// either completely replaced or left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackerError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let result = write(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Check that a path exists and is a regular file
pub fn is_regular_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
