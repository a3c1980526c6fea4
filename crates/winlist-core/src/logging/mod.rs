use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for this crate family (`winlist`, `winlist_core`).
fn level_directive(verbose: bool) -> &'static str {
    if verbose {
        "winlist=info"
    } else {
        "winlist=error"
    }
}

/// Install the global subscriber: JSON lines on stderr.
///
/// stdout belongs to `--fetch` and `--test`, which polybar and pipes read
/// verbatim. `RUST_LOG` adds directives for other targets; the `winlist`
/// level is always set by `verbose`.
pub fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(level_directive(verbose).parse().expect("Invalid log directive")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive_parses() {
        for verbose in [false, true] {
            let directive: tracing_subscriber::filter::Directive =
                level_directive(verbose).parse().unwrap();
            assert!(directive.to_string().starts_with("winlist="));
        }
        assert_eq!(level_directive(false), "winlist=error");
        assert_eq!(level_directive(true), "winlist=info");
    }
}
