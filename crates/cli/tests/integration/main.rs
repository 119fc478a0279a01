//! CLI integration tests.
//!
//! These drive the `dojo-build` binary against a fake Dojo toolkit whose
//! `build.sh` is a small shell script.

mod common;

#[cfg(unix)]
mod build_tests;
