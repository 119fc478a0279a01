//! Error and result types for build runs.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::build::exclude::ExcludeError;
use crate::profile::ProfileError;

/// Errors from a build batch. The batch stops at the first one.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error(transparent)]
  Profile(#[from] ProfileError),

  /// The build script could not be started or exited non-zero.
  ///
  /// Details are logged at debug level, not carried here.
  #[error("build command failed")]
  CommandFailed,

  #[error("failed to reconcile release for '{name}': {source}")]
  Reconcile {
    name: String,
    #[source]
    source: ReconcileError,
  },
}

/// Errors from running the build script.
#[derive(Debug, Error)]
pub enum ExecuteError {
  #[error("failed to start {script}: {source}")]
  Spawn {
    script: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed waiting for {script}: {source}")]
  Wait {
    script: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{script} exited with code {code:?}")]
  Exit { script: PathBuf, code: Option<i32> },
}

/// Errors while merging a release tree into the destination.
#[derive(Debug, Error)]
pub enum ReconcileError {
  #[error("failed to traverse {path}: {source}")]
  Walk {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("exclude filter failed for {path}: {source}")]
  Exclude {
    path: PathBuf,
    #[source]
    source: ExcludeError,
  },

  #[error("failed to create directory {path}: {source}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to copy {from} to {to}: {source}")]
  Copy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Counts from reconciling one release tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
  /// Directories created or merged into
  pub directories: usize,
  pub files: usize,
  /// Entries the exclude filter rejected; a pruned directory counts once
  pub skipped: usize,
}

/// Outcome of one named build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
  pub name: String,
  pub stats: ReconcileStats,
}

/// Outcome of a build batch, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
  pub builds: Vec<BuildSummary>,
}

impl BuildReport {
  pub fn names(&self) -> Vec<&str> {
    self.builds.iter().map(|b| b.name.as_str()).collect()
  }
}
