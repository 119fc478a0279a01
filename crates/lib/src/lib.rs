//! dojo-build-lib: profile generation and release reconciliation for the Dojo build tool
//!
//! This crate drives the external `util/buildscripts/build.sh` bundler:
//! - `BuildConfig`: one named build job, serialized into a build profile
//! - `profile`: renders and writes `<src>/profiles/<name>.profile.js`
//! - `build`: runs the build script and merges its release tree into the destination
//! - `ExcludeFilter`: decides which release entries are left behind

pub mod build;
pub mod config;
pub mod consts;
pub mod platform;
pub mod profile;


pub use build::{BuildError, BuildReport, Builder, ExcludeFilter, KeepAll, PatternExclude, ReconcileStats, reconcile};
pub use config::{BuildConfig, Feature, Layer, Package, ProjectConfig};
pub use profile::{ProfileError, generate_profile, render_profile};
