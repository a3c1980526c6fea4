use std::fmt;
use sysinfo::Pid as SysinfoPid;

use crate::process::errors::ProcessError;

/// Non-zero process ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Result<Self, ProcessError> {
        if pid == 0 {
            return Err(ProcessError::InvalidPid { pid });
        }
        Ok(Self(pid))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_sysinfo_pid(&self) -> SysinfoPid {
        SysinfoPid::from_u32(self.0)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The status-bar process a publisher serves.
///
/// Fixed for the lifetime of one publisher; liveness is re-checked after every
/// refresh through [`crate::process::BarProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarHandle {
    pub pid: Pid,
    pub process_name: String,
}
