use nix::sys::signal::Signal;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// Where the event loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    /// Blocked on the next event line
    Listening,
    /// Query, format, write, notify
    Refreshing,
    Terminating,
}

/// Why the event loop stopped. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The bar process is gone
    BarExited,
    /// SIGINT, SIGQUIT or SIGTERM
    Signal(Signal),
    /// `bspc subscribe` closed its output
    EventStreamClosed,
    /// The reader of `--test` output went away
    OutputClosed,
}

impl LoopExit {
    pub fn reason(&self) -> &'static str {
        match self {
            LoopExit::BarExited => "bar_exited",
            LoopExit::Signal(_) => "signal",
            LoopExit::EventStreamClosed => "event_stream_closed",
            LoopExit::OutputClosed => "output_closed",
        }
    }
}

/// Termination request shared between the signal thread and the loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicI32>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self, signal: Signal) {
        self.0.store(signal as i32, Ordering::SeqCst);
    }

    pub fn received(&self) -> Option<Signal> {
        match self.0.load(Ordering::SeqCst) {
            0 => None,
            raw => Signal::try_from(raw).ok(),
        }
    }
}

/// Pid of the running `bspc subscribe`, published to the signal thread once
/// the child exists. 0 means not spawned yet.
#[derive(Debug, Clone, Default)]
pub struct SubscriberSlot(Arc<AtomicI32>);

impl SubscriberSlot {
    pub fn set(&self, pid: nix::unistd::Pid) {
        self.0.store(pid.as_raw(), Ordering::SeqCst);
    }

    pub fn get(&self) -> Option<nix::unistd::Pid> {
        match self.0.load(Ordering::SeqCst) {
            0 => None,
            raw => Some(nix::unistd::Pid::from_raw(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutdown_flag_is_shared_between_clones() {
        let flag = ShutdownFlag::new();
        let other = flag.clone();
        assert_eq!(flag.received(), None);

        other.trigger(Signal::SIGTERM);

        assert_eq!(flag.received(), Some(Signal::SIGTERM));
    }

    #[test]
    fn test_subscriber_slot_starts_empty() {
        let slot = SubscriberSlot::default();
        assert_eq!(slot.get(), None);

        slot.clone().set(nix::unistd::Pid::from_raw(4321));

        assert_eq!(slot.get(), Some(nix::unistd::Pid::from_raw(4321)));
    }

    #[test]
    fn test_loop_exit_reason() {
        assert_eq!(LoopExit::BarExited.reason(), "bar_exited");
        assert_eq!(LoopExit::Signal(Signal::SIGINT).reason(), "signal");
        assert_eq!(LoopExit::EventStreamClosed.reason(), "event_stream_closed");
        assert_eq!(LoopExit::OutputClosed.reason(), "output_closed");
    }
}
