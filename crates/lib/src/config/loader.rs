//! Project config discovery and loading.
//!
//! Lookup order for the config file:
//! 1. an explicit path (the CLI `--config` flag)
//! 2. `$DOJO_BUILD_CONFIG`
//! 3. `dojo-build.json` in the working directory
//!
//! Relative `srcDir`, `destDir` and `bin` entries are resolved against the
//! directory containing the config file.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_FILE};

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse config {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

/// Returns the config path to use when none was given explicitly.
pub fn default_config_path() -> PathBuf {
  std::env::var_os(CONFIG_ENV)
    .filter(|v| !v.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

impl ProjectConfig {
  /// Load a project config from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    let mut config: ProjectConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    let base = config_base_dir(path);
    config.src_dir = resolve(&base, &config.src_dir);
    config.dest_dir = resolve(&base, &config.dest_dir);
    config.bin = config.bin.as_deref().map(|bin| resolve(&base, bin));

    debug!(
      path = ?path,
      src_dir = ?config.src_dir,
      dest_dir = ?config.dest_dir,
      builds = config.build_configs.len(),
      "loaded project config"
    );

    Ok(config)
  }
}

fn config_base_dir(path: &Path) -> PathBuf {
  let parent = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
    _ => PathBuf::from("."),
  };
  dunce::canonicalize(&parent).unwrap_or(parent)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
  if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
