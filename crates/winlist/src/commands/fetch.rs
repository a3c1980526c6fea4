use clap::ArgMatches;
use tracing::{error, info, warn};

use winlist_core::errors::WinlistError;
use winlist_core::events;
use winlist_core::publisher_ops;

use super::helpers::{load_config_with_warning, resolve_cache_dir};

pub(crate) fn handle_fetch_command(
    matches: &ArgMatches,
    pid: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning(matches);
    let cache_dir = resolve_cache_dir(matches, &config);

    info!(event = "cli.fetch_started", pid = pid, cache_dir = %cache_dir.display());

    match publisher_ops::fetch_cached_line(&cache_dir, pid) {
        Ok(line) => {
            println!("{}", line);
            info!(event = "cli.fetch_completed", pid = pid);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_user_error() {
                warn!(event = "cli.fetch_failed", pid = pid, error = %e);
            } else {
                error!(event = "cli.fetch_failed", pid = pid, error = %e);
            }
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
