use crate::cache::CacheError;
use crate::errors::WinlistError;
use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    #[error("Failed to subscribe to bspwm events: {message}")]
    SubscribeFailed { message: String },

    #[error("Failed to install signal handling: {message}")]
    SignalSetup { message: String },

    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl PublisherError {
    /// The output reader is gone (e.g. `winlist --test | head -1`).
    pub fn is_output_closed(&self) -> bool {
        matches!(
            self,
            PublisherError::Output { source } if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

impl WinlistError for PublisherError {
    fn error_code(&self) -> &'static str {
        match self {
            PublisherError::SubscribeFailed { .. } => "PUBLISHER_SUBSCRIBE_FAILED",
            PublisherError::SignalSetup { .. } => "PUBLISHER_SIGNAL_SETUP_FAILED",
            PublisherError::Output { .. } => "PUBLISHER_OUTPUT_FAILED",
            PublisherError::Cache(e) => e.error_code(),
            PublisherError::Process(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            PublisherError::Cache(e) => e.is_user_error(),
            PublisherError::Process(e) => e.is_user_error(),
            _ => false,
        }
    }
}
