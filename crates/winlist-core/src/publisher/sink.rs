//! Output destinations for formatted lines.

use std::io::Write;
use tracing::{debug, error};

use crate::cache::{BarNotifier, CacheFile};
use crate::process::BarHandle;
use crate::publisher::errors::PublisherError;

/// Destination of each refreshed line.
pub trait OutputSink {
    fn publish(&mut self, line: &str) -> Result<(), PublisherError>;

    /// The bar whose liveness keeps the loop running, if any.
    fn bar(&self) -> Option<&BarHandle> {
        None
    }

    /// Give back any held resources. Called once when the loop terminates.
    fn release(&mut self) {}
}

/// Writes the bar's cache file, then tells the bar to re-read it.
#[derive(Debug)]
pub struct CacheSink {
    cache: Option<CacheFile>,
    notifier: BarNotifier,
    bar: BarHandle,
}

impl CacheSink {
    pub fn new(cache: CacheFile, notifier: BarNotifier, bar: BarHandle) -> Self {
        Self {
            cache: Some(cache),
            notifier,
            bar,
        }
    }
}

impl OutputSink for CacheSink {
    fn publish(&mut self, line: &str) -> Result<(), PublisherError> {
        let Some(cache) = &self.cache else {
            debug!(event = "core.publisher.publish_after_release");
            return Ok(());
        };

        // Stale content stays in place and the bar is not poked on failure.
        if let Err(e) = cache.write(line) {
            error!(
                event = "core.publisher.cache_write_failed",
                path = %cache.path().display(),
                error = %e
            );
            return Err(e.into());
        }

        let notified = self.notifier.notify();
        debug!(
            event = "core.publisher.published",
            bar_pid = self.bar.pid.as_u32(),
            notified = notified
        );
        Ok(())
    }

    fn bar(&self) -> Option<&BarHandle> {
        Some(&self.bar)
    }

    fn release(&mut self) {
        // Dropping the guard removes the file.
        self.cache.take();
    }
}

/// Prints each line, for `--test`.
#[derive(Debug)]
pub struct StdoutSink<W: Write> {
    writer: W,
}

impl<W: Write> StdoutSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for StdoutSink<W> {
    fn publish(&mut self, line: &str) -> Result<(), PublisherError> {
        writeln!(self.writer, "{}", line)
            .and_then(|_| self.writer.flush())
            .map_err(|e| PublisherError::Output { source: e })
    }
}
