//! Test utilities for dojo-build-lib.
//!
//! Tests stand in for the Dojo toolkit with a small `/bin/sh` build script
//! installed at the place the real one lives.

use std::path::{Path, PathBuf};

use crate::consts::BUILD_SCRIPT;

/// Install `<src_dir>/util/buildscripts/build.sh` running `body`.
///
/// The script runs with `set -e`, so any failing line fails the build.
#[cfg(unix)]
pub fn install_build_script(src_dir: &Path, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let script = src_dir.join(BUILD_SCRIPT);
  std::fs::create_dir_all(script.parent().unwrap()).unwrap();
  std::fs::write(&script, format!("#!/bin/sh\nset -e\n{body}\n")).unwrap();
  std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
  script
}

/// Shell lines that write `content` to `path`, creating parent directories.
pub fn sh_write_file(path: &Path, content: &str) -> String {
  let parent = path.parent().unwrap_or(path);
  format!(
    "mkdir -p '{}'\nprintf '%s' '{}' > '{}'",
    parent.display(),
    content,
    path.display()
  )
}
