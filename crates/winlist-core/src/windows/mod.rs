//! Focused-desktop window lookup through bspwm and wmctrl.

pub mod operations;
pub mod traits;
pub mod types;

pub use operations::BspwmQuery;
pub use traits::WindowQuery;
pub use types::{WindowMeta, WindowRecord};
