//! Ownership propagation for reconciled release entries.
//!
//! ## Platform Behavior
//!
//! - **Unix**: `chown` the destination to the source entry's uid/gid
//! - **Windows**: no-op, there is no uid/gid to carry over
//!
//! Failures never surface to callers. An unprivileged process can only hand
//! a file to itself, so most real failures here are expected.

use std::fs::Metadata;
use std::path::Path;

#[cfg(unix)]
use tracing::trace;

/// Copy the owning user and group of `source` onto `dest`, best-effort.
#[cfg(unix)]
pub fn copy_owner(source: &Metadata, dest: &Path) {
  use rustix::fs::chown;
  use rustix::process::{Gid, Uid};
  use std::os::unix::fs::MetadataExt;

  let uid = Uid::from_raw(source.uid());
  let gid = Gid::from_raw(source.gid());

  if let Err(e) = chown(dest, Some(uid), Some(gid)) {
    trace!(path = ?dest, uid = source.uid(), gid = source.gid(), error = %e, "could not copy owner");
  }
}

#[cfg(not(unix))]
pub fn copy_owner(_source: &Metadata, _dest: &Path) {}
