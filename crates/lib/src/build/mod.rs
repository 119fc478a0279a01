//! Running the Dojo build tool and collecting its release.
//!
//! # Submodules
//!
//! - [`execute`] - spawns `build.sh` and streams its output
//! - [`reconcile`] - merges the release tree into the destination
//! - [`exclude`] - filters deciding which release entries are dropped
//! - [`runner`] - `Builder`, which ties the steps together per build name

pub mod exclude;
pub mod execute;
pub mod reconcile;
pub mod runner;
mod types;

pub use exclude::{ExcludeError, ExcludeFilter, KeepAll, PatternExclude};
pub use execute::{ToolOutput, run_build_script};
pub use reconcile::reconcile;
pub use runner::Builder;
pub use types::*;
