use std::path::Path;

use anyhow::{Context, Result};

use dojo_build_lib::profile::generate_profile;

use crate::cmd::load_project;

/// Write one build profile without running the build, then print where it went.
pub fn cmd_profile(config: Option<&Path>, name: &str) -> Result<()> {
  let project = load_project(config)?;

  let path = generate_profile(&project, name).with_context(|| format!("Failed to generate profile: {}", name))?;

  println!("{}", path.display());
  Ok(())
}
