//! Process-level lifecycle events.
//!
//! Module-specific events are emitted in place as `core.<module>.<what>`;
//! only the ones that bracket a whole run live here.

use tracing::{error, info, warn};

use crate::errors::WinlistError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// `reason` is a [`crate::LoopExit::reason`] string.
pub fn log_app_shutdown(reason: &str) {
    info!(event = "core.app.shutdown_started", reason = reason);
}

/// Log a failure that ends the run. User errors go out at warn level.
pub fn log_app_error(error: &dyn WinlistError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code(),
            user_error = false
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    #[test]
    fn test_app_events() {
        log_app_startup();
        log_app_shutdown("bar_exited");

        log_app_error(&ConfigError::ConfigParseError {
            message: "expected '='".to_string(),
        });
        log_app_error(&ConfigError::from(std::io::Error::other("disk gone")));
    }
}
