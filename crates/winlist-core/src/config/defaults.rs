//! Default implementations for configuration types.
//!
//! Used both by the `Default` impls and by serde `#[serde(default = "...")]`
//! attributes, so a partially filled section gets the same values as a
//! missing one.

use crate::config::types::{BarConfig, ColorConfig, EventsConfig, LabelConfig, WinlistConfig};
use std::path::PathBuf;
use tracing::warn;

pub fn default_max_width() -> usize {
    20
}

pub fn default_ellipsis() -> String {
    "..".to_string()
}

pub fn default_padding() -> usize {
    1
}

pub fn default_dim_fg() -> String {
    "#6b7089".to_string()
}

pub fn default_focused_fg() -> String {
    "#c6c8d1".to_string()
}

pub fn default_focused_bg() -> String {
    "#1e2132".to_string()
}

pub fn default_process_name() -> String {
    "polybar".to_string()
}

pub fn default_queue_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

pub fn default_queue_name() -> String {
    "polybar_mqueue".to_string()
}

pub fn default_hook() -> String {
    "hook:module/window-list1".to_string()
}

pub fn default_separator() -> String {
    "|".to_string()
}

/// Events that change which windows are on the focused desktop or which one
/// has focus.
pub fn default_subscribed_events() -> Vec<String> {
    [
        "desktop_focus",
        "desktop_layout",
        "node_focus",
        "node_remove",
        "node_transfer",
    ]
    .iter()
    .map(|e| e.to_string())
    .collect()
}

/// Returns `<XDG cache>/polybar`, falling back to the temp dir when no cache
/// directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache) => cache.join("polybar"),
        None => {
            warn!(
                event = "core.config.cache_dir_fallback",
                "Could not determine cache directory. Set HOME or XDG_CACHE_HOME."
            );
            std::env::temp_dir().join("polybar")
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            ellipsis: default_ellipsis(),
            padding: default_padding(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            dim_fg: default_dim_fg(),
            focused_fg: default_focused_fg(),
            focused_bg: default_focused_bg(),
        }
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            process_name: default_process_name(),
            cache_dir: None,
            queue_dir: default_queue_dir(),
            queue_name: default_queue_name(),
            hook: default_hook(),
            separator: default_separator(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            subscribe: default_subscribed_events(),
        }
    }
}

impl WinlistConfig {
    /// Cache directory from config, or the default location.
    pub fn cache_dir(&self) -> PathBuf {
        self.bar.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults() {
        let label = LabelConfig::default();
        assert_eq!(label.max_width, 20);
        assert_eq!(label.ellipsis, "..");
        assert_eq!(label.padding, 1);
    }

    #[test]
    fn test_bar_defaults() {
        let bar = BarConfig::default();
        assert_eq!(bar.process_name, "polybar");
        assert_eq!(bar.queue_dir, PathBuf::from("/tmp"));
        assert_eq!(bar.queue_name, "polybar_mqueue");
        assert_eq!(bar.hook, "hook:module/window-list1");
        assert!(bar.cache_dir.is_none());
    }

    #[test]
    fn test_default_events_cover_focus_and_removal() {
        let events = EventsConfig::default().subscribe;
        for expected in ["desktop_focus", "node_focus", "node_remove"] {
            assert!(events.iter().any(|e| e == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_cache_dir_override() {
        let mut config = WinlistConfig::default();
        config.bar.cache_dir = Some(PathBuf::from("/var/tmp/bars"));
        assert_eq!(config.cache_dir(), PathBuf::from("/var/tmp/bars"));
    }

    #[test]
    fn test_default_cache_dir_ends_with_polybar() {
        assert!(default_cache_dir().ends_with("polybar"));
    }
}
