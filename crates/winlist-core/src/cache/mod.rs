pub mod errors;
pub mod notify;
pub mod operations;

pub use errors::CacheError;
pub use notify::{BarNotifier, queue_path};
pub use operations::{CacheFile, cache_file_path, ensure_cache_dir, read_cache, write_atomic};
