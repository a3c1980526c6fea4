//! # Configuration System
//!
//! TOML configuration for the window list publisher.
//!
//! ```toml
//! # ~/.config/winlist/config.toml
//! [label]
//! max_width = 20
//!
//! [bar]
//! separator = "%{F#444b6a}|%{F-}"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use winlist_core::config::WinlistConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WinlistConfig::load_hierarchy()?;
//!     println!("{}", config.cache_dir().display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{BarConfig, ColorConfig, EventsConfig, LabelConfig, WinlistConfig};
pub use validation::{VALID_EVENTS, validate_config};

impl WinlistConfig {
    /// Load configuration from defaults and the user config file.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Load configuration from an explicit file.
    ///
    /// See [`loading::load_config_file`] for details.
    pub fn load_from(path: &std::path::Path) -> Result<Self, crate::errors::ConfigError> {
        loading::load_config_file(path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
