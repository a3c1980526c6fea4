use sysinfo::{ProcessesToUpdate, System};
use tracing::{debug, info};

use crate::process::errors::ProcessError;
use crate::process::traits::BarProbe;
use crate::process::types::{BarHandle, Pid};

/// Name of the process with the given PID, if one exists
fn process_name(pid: Pid) -> Option<String> {
    let mut system = System::new();
    let pid_obj = pid.to_sysinfo_pid();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);
    system
        .process(pid_obj)
        .map(|process| process.name().to_string_lossy().to_string())
}

/// Extract the base name from a path
fn extract_base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Check if a process name matches an expected name
///
/// Only exact matches and base-name matches count. A recycled PID that now
/// belongs to e.g. "polybar-msg" must not be mistaken for the bar.
fn process_name_matches(actual_name: &str, expected_name: &str) -> bool {
    actual_name == expected_name || extract_base_name(actual_name) == extract_base_name(expected_name)
}

/// Check that `pid` is running and is named `expected_name`
pub fn is_bar_process(pid: Pid, expected_name: &str) -> bool {
    match process_name(pid) {
        Some(actual) => {
            let matches = process_name_matches(&actual, expected_name);
            if !matches {
                debug!(
                    event = "core.process.name_mismatch",
                    pid = pid.as_u32(),
                    expected = expected_name,
                    actual = actual.as_str()
                );
            }
            matches
        }
        None => false,
    }
}

/// Resolve a raw pid into a [`BarHandle`] for a live bar process.
///
/// # Errors
///
/// `InvalidPid` for pid 0, `InvalidProcessId` when no process named
/// `expected_name` runs under that pid.
pub fn validate_bar_pid(pid: u32, expected_name: &str) -> Result<BarHandle, ProcessError> {
    let pid = Pid::new(pid)?;

    if !is_bar_process(pid, expected_name) {
        return Err(ProcessError::InvalidProcessId {
            pid: pid.as_u32(),
            expected: expected_name.to_string(),
        });
    }

    info!(
        event = "core.process.bar_validated",
        pid = pid.as_u32(),
        process_name = expected_name
    );

    Ok(BarHandle {
        pid,
        process_name: expected_name.to_string(),
    })
}

/// [`BarProbe`] backed by the system process table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBarProbe;

impl BarProbe for SystemBarProbe {
    fn is_alive(&self, bar: &BarHandle) -> bool {
        is_bar_process(bar.pid, &bar.process_name)
    }
}
