use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{BUILD_SCRIPT, PROFILE_SUFFIX, PROFILES_DIR, RELEASE_TMP_DIR};

/// One named build job, serialized as the body of a build profile.
///
/// Field order and JSON names follow what `build.sh` reads from `var profile = {...}`.
/// `base_path` and `release_dir` are always overwritten by the profile generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
  /// Drop `*.js.uncompressed.js` artifacts after the build
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub remove_uncompressed: bool,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub remove_console_stripped: bool,

  pub base_path: String,
  pub release_dir: PathBuf,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub release_name: String,
  pub action: String,
  pub packages: Vec<Package>,
  pub layers: BTreeMap<String, Layer>,

  #[serde(skip_serializing_if = "String::is_empty")]
  pub layer_optimize: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub optimize: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub css_optimize: String,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub mini: bool,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub strip_console: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub selector_engine: String,
  #[serde(skip_serializing_if = "BTreeMap::is_empty")]
  pub static_has_features: BTreeMap<String, Feature>,
  /// Have the build generate source maps
  pub use_source_maps: bool,
}

/// A module search root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
  pub name: String,
  pub location: String,
}

impl Package {
  pub fn new(name: &str, location: &str) -> Self {
    Self {
      name: name.to_string(),
      location: location.to_string(),
    }
  }
}

/// A bundle the build tool emits as a single artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layer {
  pub boot: bool,
  pub custom_base: bool,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub include: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub exclude: Vec<String>,
}

/// A `has()` feature flag.
///
/// The build tool expects numeric flags, so this serializes as `1` or `0`.
/// Config files may use either a boolean or one of those numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Feature(pub bool);

impl From<bool> for Feature {
  fn from(value: bool) -> Self {
    Feature(value)
  }
}

impl Serialize for Feature {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(self.0))
  }
}

impl<'de> Deserialize<'de> for Feature {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Bool(bool),
      Number(u64),
    }

    match Raw::deserialize(deserializer)? {
      Raw::Bool(b) => Ok(Feature(b)),
      Raw::Number(0) => Ok(Feature(false)),
      Raw::Number(1) => Ok(Feature(true)),
      Raw::Number(n) => Err(D::Error::custom(format!("feature flag must be 0 or 1, got {n}"))),
    }
  }
}

/// Everything a build batch needs: where the toolkit sources live, where releases go,
/// and the named build configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
  /// Toolkit source directory (contains `util/buildscripts/build.sh`)
  pub src_dir: PathBuf,
  /// Persistent destination for release artifacts
  pub dest_dir: PathBuf,
  /// Optional `--bin` override passed through to the build script
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bin: Option<PathBuf>,
  #[serde(default)]
  pub build_configs: BTreeMap<String, BuildConfig>,
}

impl ProjectConfig {
  pub fn new(src_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
    Self {
      src_dir: src_dir.into(),
      dest_dir: dest_dir.into(),
      bin: None,
      build_configs: BTreeMap::new(),
    }
  }

  /// Adds (or replaces) a named build config.
  pub fn with_build(mut self, name: &str, config: BuildConfig) -> Self {
    self.build_configs.insert(name.to_string(), config);
    self
  }

  /// Configured build names, in lexical order.
  pub fn names(&self) -> Vec<String> {
    self.build_configs.keys().cloned().collect()
  }

  /// Where the build tool writes its release before reconciliation.
  pub fn release_dir(&self) -> PathBuf {
    self.dest_dir.join(RELEASE_TMP_DIR)
  }

  pub fn profiles_dir(&self) -> PathBuf {
    self.src_dir.join(PROFILES_DIR)
  }

  /// `<src>/profiles/<name>.profile.js`
  pub fn profile_path(&self, name: &str) -> PathBuf {
    self.profiles_dir().join(format!("{name}{PROFILE_SUFFIX}"))
  }

  pub fn build_script(&self) -> PathBuf {
    self.src_dir.join(BUILD_SCRIPT)
  }
}
