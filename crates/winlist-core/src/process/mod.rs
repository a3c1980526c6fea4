pub mod errors;
pub mod operations;
pub mod traits;
pub mod types;

pub use errors::ProcessError;
pub use operations::{SystemBarProbe, is_bar_process, validate_bar_pid};
pub use traits::BarProbe;
pub use types::{BarHandle, Pid};
