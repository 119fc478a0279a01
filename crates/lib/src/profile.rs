//! Build profile generation.
//!
//! A profile is the configuration file `build.sh` reads: a single statement
//! `var profile = {...};` whose object is the JSON form of a [`BuildConfig`].

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::{BuildConfig, ProjectConfig};
use crate::consts::{DEFAULT_ACTION, PROFILE_BASE_PATH};

#[derive(Debug, Error)]
pub enum ProfileError {
  #[error("no build config found with name '{0}'")]
  ConfigNotFound(String),

  #[error("failed to serialize build config '{name}': {source}")]
  Serialize {
    name: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to create profile directory {path}: {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write profile {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Look up `name` and apply the values every profile is written with.
///
/// The returned config is a copy; the project config itself is left untouched.
pub fn resolve_build_config(project: &ProjectConfig, name: &str) -> Result<BuildConfig, ProfileError> {
  let mut config = project
    .build_configs
    .get(name)
    .cloned()
    .ok_or_else(|| ProfileError::ConfigNotFound(name.to_string()))?;

  if config.action.is_empty() {
    config.action = DEFAULT_ACTION.to_string();
  }
  config.base_path = PROFILE_BASE_PATH.to_string();
  config.release_dir = project.release_dir();

  Ok(config)
}

/// Render a build config as profile source.
pub fn render_profile(config: &BuildConfig) -> Result<String, serde_json::Error> {
  let json = serde_json::to_string(config)?;
  Ok(format!("var profile = {json};"))
}

/// Write the profile for `name` to `<src>/profiles/<name>.profile.js`.
///
/// Returns the path of the written file. Existing content is replaced.
pub fn generate_profile(project: &ProjectConfig, name: &str) -> Result<PathBuf, ProfileError> {
  let config = resolve_build_config(project, name)?;
  let source = render_profile(&config).map_err(|source| ProfileError::Serialize {
    name: name.to_string(),
    source,
  })?;

  let profiles_dir = project.profiles_dir();
  create_profiles_dir(&profiles_dir).map_err(|source| ProfileError::CreateDir {
    path: profiles_dir.clone(),
    source,
  })?;

  let path = project.profile_path(name);
  write_profile(&path, &source).map_err(|source| ProfileError::Write {
    path: path.clone(),
    source,
  })?;

  debug!(name = %name, path = ?path, "wrote build profile");
  Ok(path)
}

fn create_profiles_dir(path: &Path) -> io::Result<()> {
  let mut builder = DirBuilder::new();
  builder.recursive(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(0o754);
  }
  builder.create(path)
}

fn write_profile(path: &Path, source: &str) -> io::Result<()> {
  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o664);
  }
  let mut file = options.open(path)?;
  file.write_all(source.as_bytes())?;
  file.flush()
}
