use clap::ArgMatches;
use tracing::{error, info, warn};

use winlist_core::errors::WinlistError;
use winlist_core::events;
use winlist_core::publisher_ops;

use super::helpers::load_config_with_warning;

pub(crate) fn handle_test_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning(matches);

    info!(event = "cli.test_started");

    match publisher_ops::run_test_mode(&config) {
        Ok(exit) => {
            info!(event = "cli.test_completed", reason = exit.reason());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_user_error() {
                warn!(event = "cli.test_failed", error = %e);
            } else {
                error!(event = "cli.test_failed", error = %e);
            }
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
