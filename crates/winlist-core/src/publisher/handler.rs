use std::io::BufRead;
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::cache::{BarNotifier, CacheFile, queue_path, read_cache};
use crate::config::WinlistConfig;
use crate::events;
use crate::format::{EntryStyle, format_list};
use crate::process::{BarProbe, Pid, SystemBarProbe, validate_bar_pid};
use crate::publisher::errors::PublisherError;
use crate::publisher::signals::install_termination_handler;
use crate::publisher::sink::{CacheSink, OutputSink, StdoutSink};
use crate::publisher::subscribe::{EventSubscription, is_subscribed_event};
use crate::publisher::types::{LoopExit, LoopState, ShutdownFlag, SubscriberSlot};
use crate::windows::{BspwmQuery, WindowQuery};

/// External tools the default query and subscription rely on.
const REQUIRED_TOOLS: [&str; 2] = ["bspc", "wmctrl"];

/// The window list event loop.
///
/// Processes one event at a time: every subscribed line triggers a full
/// query, format, publish cycle before the next line is read.
pub struct Publisher<Q: WindowQuery, P: BarProbe, S: OutputSink> {
    query: Q,
    probe: P,
    sink: S,
    style: EntryStyle,
    events: Vec<String>,
    shutdown: ShutdownFlag,
    state: LoopState,
}

impl<Q: WindowQuery, P: BarProbe, S: OutputSink> Publisher<Q, P, S> {
    pub fn new(
        query: Q,
        probe: P,
        sink: S,
        style: EntryStyle,
        events: Vec<String>,
        shutdown: ShutdownFlag,
    ) -> Self {
        Self {
            query,
            probe,
            sink,
            style,
            events,
            shutdown,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Query the focused desktop, format it, and publish the line.
    pub fn refresh(&mut self) -> Result<String, PublisherError> {
        let windows = self.query.focused_desktop_windows();
        let line = format_list(&windows, &self.style);
        self.sink.publish(&line)?;

        debug!(
            event = "core.publisher.refresh_completed",
            window_count = windows.len()
        );
        Ok(line)
    }

    /// One refresh cycle plus the post-refresh checks.
    ///
    /// A failed refresh is logged and the loop keeps listening, unless the
    /// output reader is gone.
    fn cycle(&mut self) -> Option<LoopExit> {
        self.state = LoopState::Refreshing;

        if let Err(e) = self.refresh() {
            if e.is_output_closed() {
                info!(event = "core.publisher.output_closed");
                return Some(LoopExit::OutputClosed);
            }
            error!(
                event = "core.publisher.refresh_failed",
                error = %e
            );
        }

        if let Some(signal) = self.shutdown.received() {
            return Some(LoopExit::Signal(signal));
        }

        if let Some(bar) = self.sink.bar()
            && !self.probe.is_alive(bar)
        {
            info!(
                event = "core.publisher.bar_exited",
                bar_pid = bar.pid.as_u32()
            );
            return Some(LoopExit::BarExited);
        }

        self.state = LoopState::Listening;
        None
    }

    /// Handle one event line. Returns the exit reason if the loop must stop.
    pub fn step(&mut self, line: &str) -> Option<LoopExit> {
        if let Some(signal) = self.shutdown.received() {
            return Some(LoopExit::Signal(signal));
        }

        if !is_subscribed_event(line, &self.events) {
            debug!(event = "core.publisher.event_ignored", line = line.trim());
            return None;
        }

        self.cycle()
    }

    /// Run until the bar exits, a termination signal arrives, or the event
    /// stream ends. The sink is released on every path.
    pub fn run<R: BufRead>(&mut self, events: R) -> LoopExit {
        self.state = LoopState::Listening;
        info!(event = "core.publisher.listening", events = ?self.events);

        // Publish once up front so the bar is not blank until the first event.
        let exit = match self.cycle() {
            Some(exit) => exit,
            None => self.listen(events),
        };

        self.terminate(exit)
    }

    fn listen<R: BufRead>(&mut self, events: R) -> LoopExit {
        for line in events.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(
                        event = "core.publisher.event_read_failed",
                        error = %e
                    );
                    break;
                }
            };

            if let Some(exit) = self.step(&line) {
                return exit;
            }
        }

        match self.shutdown.received() {
            Some(signal) => LoopExit::Signal(signal),
            None => LoopExit::EventStreamClosed,
        }
    }

    fn terminate(&mut self, exit: LoopExit) -> LoopExit {
        self.state = LoopState::Terminating;
        events::log_app_shutdown(exit.reason());
        self.sink.release();
        exit
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn check_required_tools() {
    for tool in REQUIRED_TOOLS {
        if let Err(e) = which::which(tool) {
            warn!(
                event = "core.publisher.tool_missing",
                tool = tool,
                error = %e
            );
        }
    }
}

/// Block termination signals and start the signal thread.
///
/// Runs first in every looping mode, before any thread or file exists.
fn prepare_shutdown() -> Result<(ShutdownFlag, SubscriberSlot), PublisherError> {
    let shutdown = ShutdownFlag::new();
    let subscriber = install_termination_handler(shutdown.clone())?;
    Ok((shutdown, subscriber))
}

/// Subscribe to bspwm and run the loop into `sink`.
fn run_subscribed<S: OutputSink>(
    config: &WinlistConfig,
    sink: S,
    shutdown: ShutdownFlag,
    subscriber: SubscriberSlot,
) -> Result<LoopExit, PublisherError> {
    check_required_tools();

    let mut subscription = EventSubscription::spawn(&config.events.subscribe)?;
    subscriber.set(subscription.pid());

    let reader = subscription
        .take_reader()
        .ok_or_else(|| PublisherError::SubscribeFailed {
            message: "bspc subscribe has no stdout".to_string(),
        })?;

    let mut publisher = Publisher::new(
        BspwmQuery,
        SystemBarProbe,
        sink,
        EntryStyle::from_config(config),
        config.events.subscribe.clone(),
        shutdown,
    );

    Ok(publisher.run(reader))
}

/// `--start`: publish into the cache file of the bar running as `bar_pid`.
pub fn start_publisher(
    config: &WinlistConfig,
    cache_dir: &Path,
    bar_pid: u32,
) -> Result<LoopExit, PublisherError> {
    let (shutdown, subscriber) = prepare_shutdown()?;

    let bar = validate_bar_pid(bar_pid, &config.bar.process_name)?;

    let cache = CacheFile::acquire(cache_dir, bar.pid)?;
    let notifier = BarNotifier::new(
        queue_path(&config.bar.queue_dir, &config.bar.queue_name, bar.pid),
        config.bar.hook.clone(),
    );

    info!(
        event = "core.publisher.start_requested",
        bar_pid = bar.pid.as_u32(),
        cache = %cache.path().display(),
        queue = %notifier.queue_path().display()
    );

    run_subscribed(
        config,
        CacheSink::new(cache, notifier, bar),
        shutdown,
        subscriber,
    )
}

/// `--test`: same loop, lines go to stdout.
pub fn run_test_mode(config: &WinlistConfig) -> Result<LoopExit, PublisherError> {
    let (shutdown, subscriber) = prepare_shutdown()?;

    info!(event = "core.publisher.test_mode_requested");
    run_subscribed(
        config,
        StdoutSink::new(std::io::stdout()),
        shutdown,
        subscriber,
    )
}

/// `--fetch`: the last line published for `bar_pid`.
pub fn fetch_cached_line(cache_dir: &Path, bar_pid: u32) -> Result<String, PublisherError> {
    let pid = Pid::new(bar_pid)?;
    let line = read_cache(cache_dir, pid)?;
    Ok(line)
}
