//! Build batches.
//!
//! For each requested name: write its profile, run `build.sh`, merge the release
//! tree into the destination, then delete the release tree. Names run one after
//! another and the batch stops at the first failure.

use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::build::exclude::{ExcludeFilter, PatternExclude};
use crate::build::execute::{ToolOutput, run_build_script};
use crate::build::reconcile::reconcile;
use crate::build::types::{BuildError, BuildReport, BuildSummary, ReconcileStats};
use crate::config::ProjectConfig;
use crate::profile::generate_profile;

/// Runs builds for a project.
///
/// Uses [`PatternExclude::default`] unless another filter is installed with
/// [`Builder::with_exclude`].
pub struct Builder<'a> {
  project: &'a ProjectConfig,
  exclude: Box<dyn ExcludeFilter + Send + Sync + 'a>,
  tool_output: ToolOutput,
}

impl<'a> Builder<'a> {
  pub fn new(project: &'a ProjectConfig) -> Self {
    Self {
      project,
      exclude: Box::new(PatternExclude::default()),
      tool_output: ToolOutput::default(),
    }
  }

  pub fn with_exclude(mut self, filter: impl ExcludeFilter + Send + Sync + 'a) -> Self {
    self.exclude = Box::new(filter);
    self
  }

  pub fn with_tool_output(mut self, output: ToolOutput) -> Self {
    self.tool_output = output;
    self
  }

  /// Build `names` in order, or every configured build when `names` is empty.
  pub async fn build(&self, names: &[String]) -> Result<BuildReport, BuildError> {
    let names = if names.is_empty() {
      self.project.names()
    } else {
      names.to_vec()
    };

    let mut report = BuildReport::default();
    for name in names {
      let stats = self.build_one(&name).await?;
      report.builds.push(BuildSummary { name, stats });
    }

    Ok(report)
  }

  /// Build a single named config.
  pub async fn build_one(&self, name: &str) -> Result<ReconcileStats, BuildError> {
    info!(name = %name, "generating build");

    let profile = generate_profile(self.project, name)?;

    run_build_script(
      &self.project.build_script(),
      &profile,
      self.project.bin.as_deref(),
      self.tool_output,
    )
    .await
    .map_err(|e| {
      debug!(name = %name, error = %e, "build script failed");
      BuildError::CommandFailed
    })?;

    let release_dir = self.project.release_dir();
    let result = reconcile(&release_dir, &self.project.dest_dir, self.exclude.as_ref());
    remove_release_dir(&release_dir);

    result.map_err(|source| BuildError::Reconcile {
      name: name.to_string(),
      source,
    })
  }
}

fn remove_release_dir(path: &Path) {
  match std::fs::remove_dir_all(path) {
    Ok(()) => debug!(path = ?path, "removed release directory"),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => warn!(path = ?path, error = %e, "failed to remove release directory"),
  }
}
