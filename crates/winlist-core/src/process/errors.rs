use crate::errors::WinlistError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("PID '{pid}' is not a running '{expected}' process")]
    InvalidProcessId { pid: u32, expected: String },

    #[error("Invalid PID: {pid}")]
    InvalidPid { pid: u32 },
}

impl WinlistError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::InvalidProcessId { .. } => "PROCESS_INVALID_BAR_PID",
            ProcessError::InvalidPid { .. } => "PROCESS_INVALID_PID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
