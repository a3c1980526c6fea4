//! The event loop tying bspwm events to the bar's cache file.
//!
//! ```text
//! Idle -> Listening -> Refreshing -> Listening -> ...
//!            any state -> Terminating (bar exited, signal, stream or output closed)
//! ```

pub mod errors;
pub mod handler;
pub mod signals;
pub mod sink;
pub mod subscribe;
pub mod types;

pub use errors::PublisherError;
pub use handler::{Publisher, fetch_cached_line, run_test_mode, start_publisher};
pub use sink::{CacheSink, OutputSink, StdoutSink};
pub use types::{LoopExit, LoopState, ShutdownFlag, SubscriberSlot};
