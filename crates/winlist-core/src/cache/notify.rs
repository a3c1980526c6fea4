//! Polybar IPC notification.
//!
//! With `enable-ipc = true` polybar reads directives from
//! `/tmp/polybar_mqueue.<pid>`. Appending a `hook:module/<name><n>` line makes
//! the module re-run its hook, which re-reads the cache file immediately.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::process::Pid;

/// `<queue_dir>/<queue_name>.<pid>`
pub fn queue_path(queue_dir: &Path, queue_name: &str, pid: Pid) -> PathBuf {
    queue_dir.join(format!("{}.{}", queue_name, pid))
}

#[derive(Debug, Clone)]
pub struct BarNotifier {
    queue_path: PathBuf,
    directive: String,
}

impl BarNotifier {
    pub fn new(queue_path: PathBuf, directive: impl Into<String>) -> Self {
        Self {
            queue_path,
            directive: directive.into(),
        }
    }

    pub fn queue_path(&self) -> &Path {
        &self.queue_path
    }

    /// Append the directive line. Returns whether it was delivered.
    ///
    /// A missing queue (IPC disabled) or a FIFO without a reader is skipped;
    /// the queue is never created and the call never blocks.
    pub fn notify(&self) -> bool {
        let file = OpenOptions::new()
            .append(true)
            .custom_flags(nix::libc::O_NONBLOCK)
            .open(&self.queue_path);

        let mut file = match file {
            Ok(file) => file,
            Err(e)
                if e.kind() == std::io::ErrorKind::NotFound
                    || e.raw_os_error() == Some(nix::libc::ENXIO) =>
            {
                debug!(
                    event = "core.notify.queue_unavailable",
                    queue = %self.queue_path.display(),
                    error = %e
                );
                return false;
            }
            Err(e) => {
                warn!(
                    event = "core.notify.open_failed",
                    queue = %self.queue_path.display(),
                    error = %e
                );
                return false;
            }
        };

        match writeln!(file, "{}", self.directive) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    event = "core.notify.write_failed",
                    queue = %self.queue_path.display(),
                    error = %e
                );
                false
            }
        }
    }
}
