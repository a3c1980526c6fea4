use clap::ArgMatches;
use std::path::PathBuf;
use tracing::warn;

use winlist_core::config::WinlistConfig;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning(matches: &ArgMatches) -> WinlistConfig {
    let explicit = matches.get_one::<PathBuf>("config");
    let result = match explicit {
        Some(path) => WinlistConfig::load_from(path),
        None => WinlistConfig::load_hierarchy(),
    };

    match result {
        Ok(config) => config,
        Err(e) => {
            let location = explicit
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.config/winlist/config.toml".to_string());
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check {} for syntax errors.",
                e, location
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            WinlistConfig::default()
        }
    }
}

/// `--cache-dir` if given, else the configured cache directory.
pub fn resolve_cache_dir(matches: &ArgMatches, config: &WinlistConfig) -> PathBuf {
    matches
        .get_one::<PathBuf>("cache-dir")
        .cloned()
        .unwrap_or_else(|| config.cache_dir())
}
