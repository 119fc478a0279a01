//! Build and project configuration.
//!
//! - [`types`] - `BuildConfig` and friends, serialized into build profiles
//! - [`loader`] - reading a `ProjectConfig` from disk

pub mod loader;
mod types;

pub use loader::{ConfigError, default_config_path};
pub use types::*;
