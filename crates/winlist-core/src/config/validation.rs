//! Configuration validation logic.

use crate::config::types::WinlistConfig;
use crate::errors::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// Event names `bspc subscribe` accepts.
pub const VALID_EVENTS: &[&str] = &[
    "all",
    "report",
    "monitor_add",
    "monitor_rename",
    "monitor_remove",
    "monitor_swap",
    "monitor_focus",
    "monitor_geometry",
    "desktop_add",
    "desktop_rename",
    "desktop_remove",
    "desktop_swap",
    "desktop_transfer",
    "desktop_focus",
    "desktop_activate",
    "desktop_layout",
    "node_add",
    "node_remove",
    "node_swap",
    "node_transfer",
    "node_focus",
    "node_activate",
    "node_presel",
    "node_stack",
    "node_geometry",
    "node_state",
    "node_flag",
    "node_layer",
    "pointer_action",
];

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("color pattern is valid")
});

fn is_valid_color(color: &str) -> bool {
    COLOR_PATTERN.is_match(color)
}

/// Validate a WinlistConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `label.max_width` must be larger than the ellipsis so a truncated label
///   keeps at least one title character
/// - colors must be `#RRGGBB` or `#AARRGGBB`
/// - `bar.process_name` must not be empty
/// - at least one event must be subscribed, all of them known to bspwm
pub fn validate_config(config: &WinlistConfig) -> Result<(), ConfigError> {
    let ellipsis_len = config.label.ellipsis.chars().count();
    if config.label.max_width <= ellipsis_len {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "label.max_width ({}) must be greater than the ellipsis length ({})",
                config.label.max_width, ellipsis_len
            ),
        });
    }

    for (field, color) in [
        ("colors.dim_fg", &config.colors.dim_fg),
        ("colors.focused_fg", &config.colors.focused_fg),
        ("colors.focused_bg", &config.colors.focused_bg),
    ] {
        if !is_valid_color(color) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "Invalid color '{}' for {}. Expected #RRGGBB or #AARRGGBB",
                    color, field
                ),
            });
        }
    }

    if config.bar.process_name.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "bar.process_name must not be empty".to_string(),
        });
    }

    if config.events.subscribe.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "events.subscribe must list at least one event".to_string(),
        });
    }

    if let Some(unknown) = config
        .events
        .subscribe
        .iter()
        .find(|e| !VALID_EVENTS.contains(&e.as_str()))
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("Unknown bspwm event '{}'", unknown),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&WinlistConfig::default()).is_ok());
    }

    #[test]
    fn test_max_width_must_exceed_ellipsis() {
        let mut config = WinlistConfig::default();
        config.label.max_width = 2;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));

        config.label.max_width = 3;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_color_validation() {
        assert!(is_valid_color("#1e2132"));
        assert!(is_valid_color("#FF1E2132"));
        assert!(!is_valid_color("1e2132"));
        assert!(!is_valid_color("#1e21"));
        assert!(!is_valid_color("#gggggg"));

        let mut config = WinlistConfig::default();
        config.colors.focused_bg = "blue".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("colors.focused_bg"));
    }

    #[test]
    fn test_unknown_event_rejected() {
        let mut config = WinlistConfig::default();
        config.events.subscribe = vec!["node_focus".to_string(), "window_open".to_string()];

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("window_open"));
    }

    #[test]
    fn test_empty_subscription_rejected() {
        let mut config = WinlistConfig::default();
        config.events.subscribe.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_process_name_rejected() {
        let mut config = WinlistConfig::default();
        config.bar.process_name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
