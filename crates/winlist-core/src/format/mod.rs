//! Rendering window records into polybar markup.

pub mod label;
pub mod markup;

pub use label::{EntryStyle, FormattedEntry, clamp_label, format_entry, format_list};
pub use markup::{colorize, strip_markup};
