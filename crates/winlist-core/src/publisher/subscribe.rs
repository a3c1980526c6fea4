//! `bspc subscribe` child process.

use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::{debug, info};

use crate::publisher::errors::PublisherError;

/// Whether an event line's name is in the subscribed allow-list.
///
/// `bspc subscribe` lines start with the event name, e.g.
/// `node_focus 0x00200002 0x00200004 0x01E00003`.
pub fn is_subscribed_event(line: &str, events: &[String]) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|name| events.iter().any(|e| e == name))
}

/// A running `bspc subscribe`. Killed and reaped on drop.
#[derive(Debug)]
pub struct EventSubscription {
    child: Child,
}

impl EventSubscription {
    pub fn spawn(events: &[String]) -> Result<Self, PublisherError> {
        let child = Command::new("bspc")
            .arg("subscribe")
            .args(events)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| PublisherError::SubscribeFailed {
                message: format!("could not run 'bspc subscribe': {}", e),
            })?;

        info!(
            event = "core.publisher.subscribed",
            pid = child.id(),
            events = ?events
        );
        Ok(Self { child })
    }

    pub fn pid(&self) -> nix::unistd::Pid {
        nix::unistd::Pid::from_raw(self.child.id() as i32)
    }

    /// The event stream. Can be taken once.
    pub fn take_reader(&mut self) -> Option<BufReader<ChildStdout>> {
        self.child.stdout.take().map(BufReader::new)
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self.child.kill();
        match self.child.wait() {
            Ok(status) => debug!(
                event = "core.publisher.subscription_released",
                status = ?status.code()
            ),
            Err(e) => debug!(
                event = "core.publisher.subscription_wait_failed",
                error = %e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<String> {
        vec!["node_focus".to_string(), "desktop_focus".to_string()]
    }

    #[test]
    fn test_subscribed_event_matches_first_token() {
        assert!(is_subscribed_event(
            "node_focus 0x00200002 0x00200004 0x01E00003",
            &events()
        ));
        assert!(is_subscribed_event("desktop_focus 0x1 0x2\n", &events()));
    }

    #[test]
    fn test_other_lines_are_ignored() {
        assert!(!is_subscribed_event("node_remove 0x1 0x2 0x3", &events()));
        assert!(!is_subscribed_event("node_focused 0x1", &events()));
        assert!(!is_subscribed_event("", &events()));
        assert!(!is_subscribed_event("   ", &events()));
        assert!(!is_subscribed_event("WMDP-1:Oone", &events()));
    }
}
