//! Termination signal handling.
//!
//! SIGINT, SIGQUIT and SIGTERM are blocked on the calling thread and collected
//! by a dedicated thread with `sigwait`. That thread only records the signal
//! and kills the `bspc subscribe` child if one has been spawned; the loop's
//! blocked read then hits EOF and the normal cleanup path runs on the main
//! thread.
//!
//! The handler is installed before the cache file exists, so a signal during
//! startup is recorded instead of killing the process with the file on disk.
//! Children spawned through `std::process::Command` start with an empty signal
//! mask and are unaffected by the block.

use nix::sys::signal::{SigSet, Signal, kill};
use tracing::{info, warn};

use crate::publisher::errors::PublisherError;
use crate::publisher::types::{ShutdownFlag, SubscriberSlot};

pub fn termination_signals() -> SigSet {
    let mut set = SigSet::empty();
    set.add(Signal::SIGINT);
    set.add(Signal::SIGQUIT);
    set.add(Signal::SIGTERM);
    set
}

/// Block termination signals and start the signal thread.
///
/// Must run on the main thread before any other thread is spawned, so every
/// thread inherits the blocked mask. The returned slot is where the caller
/// publishes the subscriber pid once it exists; the child is killed with
/// SIGKILL.
pub fn install_termination_handler(flag: ShutdownFlag) -> Result<SubscriberSlot, PublisherError> {
    let signals = termination_signals();
    signals
        .thread_block()
        .map_err(|e| PublisherError::SignalSetup {
            message: format!("could not block termination signals: {}", e),
        })?;

    let subscriber = SubscriberSlot::default();
    let watched = subscriber.clone();

    std::thread::Builder::new()
        .name("winlist-signals".to_string())
        .spawn(move || match signals.wait() {
            Ok(signal) => {
                info!(
                    event = "core.publisher.signal_received",
                    signal = signal.as_str()
                );
                // Flag first: a subscriber published after this load is
                // caught by the loop's own flag check.
                flag.trigger(signal);
                if let Some(child) = watched.get()
                    && let Err(e) = kill(child, Signal::SIGKILL)
                {
                    warn!(
                        event = "core.publisher.subscriber_kill_failed",
                        pid = child.as_raw(),
                        error = %e
                    );
                }
            }
            Err(e) => warn!(
                event = "core.publisher.signal_wait_failed",
                error = %e
            ),
        })
        .map_err(|e| PublisherError::SignalSetup {
            message: format!("could not start signal thread: {}", e),
        })?;

    Ok(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_termination_signals() {
        let set = termination_signals();
        assert!(set.contains(Signal::SIGINT));
        assert!(set.contains(Signal::SIGQUIT));
        assert!(set.contains(Signal::SIGTERM));
        assert!(!set.contains(Signal::SIGHUP));
    }
}
