//! Per-bar cache file handling.
//!
//! The publisher is the only writer; polybar reads the file after each
//! notification. Writes go through a temp file and a rename so the bar never
//! sees a half-written line.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cache::errors::CacheError;
use crate::process::Pid;

pub const CACHE_FILE_PREFIX: &str = "window-list";

/// `<cache_dir>/window-list.<pid>`
pub fn cache_file_path(cache_dir: &Path, pid: Pid) -> PathBuf {
    cache_dir.join(format!("{}.{}", CACHE_FILE_PREFIX, pid))
}

pub fn ensure_cache_dir(cache_dir: &Path) -> Result<(), CacheError> {
    fs::create_dir_all(cache_dir).map_err(|e| CacheError::DirectoryUnavailable {
        path: cache_dir.to_path_buf(),
        source: e,
    })
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.cache.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}

/// Replace the contents of `path` with `contents` via temp file + rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), CacheError> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_file = PathBuf::from(temp_name);

    if let Err(e) = fs::write(&temp_file, contents) {
        cleanup_temp_file(&temp_file, &e);
        return Err(CacheError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        });
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(CacheError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}

/// Read the cached line for a bar. Never creates the file.
pub fn read_cache(cache_dir: &Path, pid: Pid) -> Result<String, CacheError> {
    let path = cache_file_path(cache_dir, pid);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CacheError::NotFound { path }),
        Err(e) => Err(CacheError::ReadFailed { path, source: e }),
    }
}

/// Exclusive handle on one bar's cache file.
///
/// Acquiring creates the directory and an empty file; dropping removes the
/// file, whichever way the publisher exits.
#[derive(Debug)]
pub struct CacheFile {
    path: PathBuf,
}

impl CacheFile {
    pub fn acquire(cache_dir: &Path, pid: Pid) -> Result<Self, CacheError> {
        ensure_cache_dir(cache_dir)?;
        let path = cache_file_path(cache_dir, pid);
        write_atomic(&path, "")?;

        info!(
            event = "core.cache.acquired",
            path = %path.display()
        );
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cached line.
    ///
    /// The directory is re-created first in case it was removed while the
    /// publisher was running.
    pub fn write(&self, line: &str) -> Result<(), CacheError> {
        if let Some(dir) = self.path.parent() {
            ensure_cache_dir(dir)?;
        }
        write_atomic(&self.path, line)
    }
}

impl Drop for CacheFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(
                event = "core.cache.removed",
                path = %self.path.display()
            ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                event = "core.cache.remove_failed",
                path = %self.path.display(),
                error = %e
            ),
        }
    }
}
