//! Exclude filters for release reconciliation.
//!
//! A filter sees every entry of the release tree (path + metadata) and decides
//! whether it stays behind. Rejecting a directory prunes its whole subtree.

use std::fs::Metadata;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

pub type ExcludeError = Box<dyn std::error::Error + Send + Sync>;

/// Build byproducts: `foo.js.uncompressed.js` and `foo.js.consoleStripped.js`.
pub const ARTIFACT_PATTERN: &str = r".*\.js\.(uncompressed|consoleStripped)\.js";

fn artifact_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(ARTIFACT_PATTERN).expect("artifact pattern is valid"))
}

pub trait ExcludeFilter {
  /// Returns `true` when the entry at `path` should not be copied.
  fn exclude(&self, path: &Path, metadata: &Metadata) -> Result<bool, ExcludeError>;
}

impl<F> ExcludeFilter for F
where
  F: Fn(&Path, &Metadata) -> Result<bool, ExcludeError>,
{
  fn exclude(&self, path: &Path, metadata: &Metadata) -> Result<bool, ExcludeError> {
    self(path, metadata)
  }
}

/// Regex-based filter with separate pattern lists for files and directories.
///
/// Patterns are unanchored and matched against the full entry path.
/// The default skips build byproducts ([`ARTIFACT_PATTERN`]) and no directories.
#[derive(Debug, Clone)]
pub struct PatternExclude {
  files: Vec<Regex>,
  dirs: Vec<Regex>,
}

impl PatternExclude {
  /// A filter with no patterns at all.
  pub fn empty() -> Self {
    Self {
      files: Vec::new(),
      dirs: Vec::new(),
    }
  }

  pub fn skip_files(mut self, pattern: &str) -> Result<Self, regex::Error> {
    self.files.push(Regex::new(pattern)?);
    Ok(self)
  }

  pub fn skip_dirs(mut self, pattern: &str) -> Result<Self, regex::Error> {
    self.dirs.push(Regex::new(pattern)?);
    Ok(self)
  }
}

impl Default for PatternExclude {
  fn default() -> Self {
    Self {
      files: vec![artifact_regex().clone()],
      dirs: Vec::new(),
    }
  }
}

impl ExcludeFilter for PatternExclude {
  fn exclude(&self, path: &Path, metadata: &Metadata) -> Result<bool, ExcludeError> {
    let patterns = if metadata.is_dir() { &self.dirs } else { &self.files };
    let path = path.to_string_lossy();
    Ok(patterns.iter().any(|re| re.is_match(&path)))
  }
}

/// Copies everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl ExcludeFilter for KeepAll {
  fn exclude(&self, _path: &Path, _metadata: &Metadata) -> Result<bool, ExcludeError> {
    Ok(false)
  }
}
