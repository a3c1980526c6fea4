use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("winlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Publish the focused bspwm desktop's windows to a polybar module")
        .long_about(
            "winlist listens for bspwm focus and layout events and writes a formatted, \
             colorized list of the focused desktop's windows to a cache file read by a \
             polybar module. After every update it asks polybar to re-read the module \
             through its IPC queue.\n\n\
             Example polybar module:\n\n  \
             [module/window-list]\n  \
             type = custom/ipc\n  \
             hook-0 = winlist --fetch %pid%\n  \
             initial = 1\n\n\
             and start the publisher with 'winlist --start <polybar pid>'.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Config file to use instead of ~/.config/winlist/config.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("cache-dir")
                .long("cache-dir")
                .value_name("DIR")
                .help("Directory for window-list.<pid> cache files (overrides config)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fetch")
                .long("fetch")
                .short('f')
                .value_name("PID")
                .help("Print the last window list published for the bar with this pid")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .short('s')
                .value_name("PID")
                .help("Listen for bspwm events and publish to the bar with this pid")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("test")
                .long("test")
                .short('t')
                .help("Listen for bspwm events and print each window list to stdout")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("mode")
                .args(["fetch", "start", "test"])
                .required(true)
                .multiple(false),
        )
        .arg_required_else_help(true)
}
