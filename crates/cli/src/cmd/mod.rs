mod build;
mod list;
mod profile;

use std::path::Path;

use anyhow::{Context, Result};

use dojo_build_lib::config::{ProjectConfig, default_config_path};

pub use build::{BuildArgs, cmd_build};
pub use list::cmd_list;
pub use profile::cmd_profile;

/// Load the project config from `explicit`, or from the default location.
fn load_project(explicit: Option<&Path>) -> Result<ProjectConfig> {
  let path = explicit.map(Path::to_path_buf).unwrap_or_else(default_config_path);
  ProjectConfig::load(&path).with_context(|| format!("Failed to load project config: {}", path.display()))
}
