//! winlist-core: Core library for the bspwm window list polybar module
//!
//! Listens for bspwm focus and layout events and republishes the focused
//! desktop's windows as one line of polybar markup, through a per-bar cache
//! file and polybar's IPC queue.
//!
//! # Main Entry Points
//!
//! - [`publisher`] - Event loop, `--start` / `--test` / `--fetch` operations
//! - [`format`] - Label clamping and color markup
//! - [`windows`] - Focused desktop window query
//! - [`cache`] - Cache file and bar notification
//! - [`process`] - Bar process validation
//! - [`config`] - Configuration management

pub mod cache;
pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod logging;
pub mod process;
pub mod publisher;
pub mod windows;

pub use config::WinlistConfig;
pub use errors::WinlistError;
pub use format::{EntryStyle, FormattedEntry};
pub use publisher::{LoopExit, PublisherError};
pub use windows::WindowRecord;

// Re-export handler module as the primary API
pub use publisher::handler as publisher_ops;

// Re-export logging initialization
pub use logging::init_logging;
