//! CLI command handlers, one per file.

mod completions;
mod config;
mod hash;
mod img;
mod url;

pub use completions::run_completions;
pub use config::run_config;
pub use hash::run_hash;
pub use img::run_img;
pub use url::run_url;
