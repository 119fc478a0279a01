//! Merging a release tree into the destination directory.
//!
//! The tree is walked depth-first in pre-order with siblings sorted by name.
//! Every entry is mapped to the same relative path under the destination,
//! offered to the exclude filter, then created (directories) or copied
//! (files). Owners are carried over best-effort.

use std::fs::DirBuilder;
use std::io;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::build::exclude::ExcludeFilter;
use crate::build::types::{ReconcileError, ReconcileStats};
use crate::platform::copy_owner;

/// Merge `tree` into `destination`, leaving out whatever `policy` excludes.
///
/// The root of `tree` itself is not copied. A missing `tree` is not an error.
/// Nothing is removed from `destination`; existing files are overwritten.
pub fn reconcile<F>(tree: &Path, destination: &Path, policy: &F) -> Result<ReconcileStats, ReconcileError>
where
  F: ExcludeFilter + ?Sized,
{
  let mut stats = ReconcileStats::default();

  if !tree.exists() {
    debug!(path = ?tree, "release directory missing, nothing to reconcile");
    return Ok(stats);
  }

  let mut entries = WalkDir::new(tree).min_depth(1).sort_by_file_name().into_iter();

  while let Some(entry) = entries.next() {
    let entry = entry.map_err(|source| ReconcileError::Walk {
      path: tree.to_path_buf(),
      source,
    })?;
    let path = entry.path();
    let metadata = entry.metadata().map_err(|source| ReconcileError::Walk {
      path: path.to_path_buf(),
      source,
    })?;

    // walkdir yields paths rooted at `tree`
    let Ok(relative) = path.strip_prefix(tree) else {
      continue;
    };
    let dest = destination.join(relative);
    let is_dir = entry.file_type().is_dir();

    let skip = policy.exclude(path, &metadata).map_err(|source| ReconcileError::Exclude {
      path: path.to_path_buf(),
      source,
    })?;

    if skip {
      trace!(path = ?path, "excluded");
      stats.skipped += 1;
      if is_dir {
        entries.skip_current_dir();
      }
      continue;
    }

    if is_dir {
      ensure_dir(&dest).map_err(|source| ReconcileError::CreateDir {
        path: dest.clone(),
        source,
      })?;
      stats.directories += 1;
    } else {
      std::fs::copy(path, &dest).map_err(|source| ReconcileError::Copy {
        from: path.to_path_buf(),
        to: dest.clone(),
        source,
      })?;
      stats.files += 1;
    }

    copy_owner(&metadata, &dest);
  }

  debug!(
    tree = ?tree,
    destination = ?destination,
    directories = stats.directories,
    files = stats.files,
    skipped = stats.skipped,
    "reconciled release"
  );

  Ok(stats)
}

/// Create `path` unless a directory is already there.
fn ensure_dir(path: &Path) -> io::Result<()> {
  let mut builder = DirBuilder::new();
  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(0o754);
  }

  match builder.create(path) {
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
    result => result,
  }
}
