use clap::ArgMatches;
use tracing::error;

use winlist_core::events;

pub mod helpers;

mod fetch;
mod start;
mod test_mode;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    if let Some(pid) = matches.get_one::<u32>("fetch") {
        fetch::handle_fetch_command(matches, *pid)
    } else if let Some(pid) = matches.get_one::<u32>("start") {
        start::handle_start_command(matches, *pid)
    } else if matches.get_flag("test") {
        test_mode::handle_test_command(matches)
    } else {
        error!(event = "cli.command_unknown");
        Err("No mode given. Use --fetch, --start or --test".into())
    }
}
