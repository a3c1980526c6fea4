//! Configuration type definitions for winlist.
//!
//! These types are deserialized from the TOML config file. Every section and
//! every field is optional; missing values fall back to the defaults in
//! [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [label]
//! max_width = 24
//! ellipsis = ".."
//! padding = 1
//!
//! [colors]
//! dim_fg = "#6b7089"
//! focused_fg = "#c6c8d1"
//! focused_bg = "#1e2132"
//!
//! [bar]
//! process_name = "polybar"
//! separator = "|"
//! hook = "hook:module/window-list1"
//!
//! [events]
//! subscribe = ["desktop_focus", "node_focus", "node_remove"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WinlistConfig {
    /// Label clamping settings
    #[serde(default)]
    pub label: LabelConfig,

    /// Polybar color markup settings
    #[serde(default)]
    pub colors: ColorConfig,

    /// Bar process, cache and IPC queue settings
    #[serde(default)]
    pub bar: BarConfig,

    /// bspwm event subscription
    #[serde(default)]
    pub events: EventsConfig,
}

/// How window titles are clamped into fixed-width labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelConfig {
    /// Width of every label in characters. Must be larger than the ellipsis.
    /// Default: 20.
    #[serde(default = "super::defaults::default_max_width")]
    pub max_width: usize,

    /// Marker appended to truncated titles. Default: "..".
    #[serde(default = "super::defaults::default_ellipsis")]
    pub ellipsis: String,

    /// Spaces added on each side of the label. Default: 1.
    #[serde(default = "super::defaults::default_padding")]
    pub padding: usize,
}

/// Colors in polybar `#RRGGBB` or `#AARRGGBB` notation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorConfig {
    /// Foreground for unfocused windows.
    #[serde(default = "super::defaults::default_dim_fg")]
    pub dim_fg: String,

    /// Foreground for the focused window.
    #[serde(default = "super::defaults::default_focused_fg")]
    pub focused_fg: String,

    /// Background for the focused window.
    #[serde(default = "super::defaults::default_focused_bg")]
    pub focused_bg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarConfig {
    /// Process name the bar pid must resolve to. Default: "polybar".
    #[serde(default = "super::defaults::default_process_name")]
    pub process_name: String,

    /// Directory holding `window-list.<pid>` cache files.
    /// Default: `<XDG cache>/polybar`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Directory holding the polybar IPC queue. Default: "/tmp".
    #[serde(default = "super::defaults::default_queue_dir")]
    pub queue_dir: PathBuf,

    /// Queue file name prefix; the bar pid is appended. Default: "polybar_mqueue".
    #[serde(default = "super::defaults::default_queue_name")]
    pub queue_name: String,

    /// Directive appended to the queue after each refresh.
    /// Default: "hook:module/window-list1".
    #[serde(default = "super::defaults::default_hook")]
    pub hook: String,

    /// Emitted verbatim between consecutive entries. Default: "|".
    #[serde(default = "super::defaults::default_separator")]
    pub separator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventsConfig {
    /// bspwm events that trigger a refresh.
    #[serde(default = "super::defaults::default_subscribed_events")]
    pub subscribe: Vec<String>,
}
