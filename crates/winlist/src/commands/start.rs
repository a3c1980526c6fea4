use clap::ArgMatches;
use tracing::{error, info, warn};

use winlist_core::errors::WinlistError;
use winlist_core::events;
use winlist_core::publisher_ops;

use super::helpers::{load_config_with_warning, resolve_cache_dir};

pub(crate) fn handle_start_command(
    matches: &ArgMatches,
    pid: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning(matches);
    let cache_dir = resolve_cache_dir(matches, &config);

    info!(event = "cli.start_started", pid = pid, cache_dir = %cache_dir.display());

    match publisher_ops::start_publisher(&config, &cache_dir, pid) {
        Ok(exit) => {
            info!(event = "cli.start_completed", pid = pid, reason = exit.reason());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, winlist_core::PublisherError::Process(_)) {
                eprintln!("Tip: Pass the pid of a running polybar, e.g. 'winlist --start $(pgrep -n polybar)'.");
            }
            if e.is_user_error() {
                warn!(event = "cli.start_failed", pid = pid, error = %e);
            } else {
                error!(event = "cli.start_failed", pid = pid, error = %e);
            }
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
