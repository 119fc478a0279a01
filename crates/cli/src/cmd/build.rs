//! Implementation of the `dojo-build build` command.
//!
//! Runs each requested build config through the Dojo build tool and merges the
//! release into the destination directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use dojo_build_lib::build::{Builder, KeepAll, PatternExclude, ToolOutput};

use crate::cmd::load_project;
use crate::output::{OutputFormat, format_duration, print_item, print_json, print_stat, print_success};

pub struct BuildArgs {
  pub names: Vec<String>,
  pub bin: Option<PathBuf>,
  pub keep_all: bool,
  pub exclude_file: Vec<String>,
  pub exclude_dir: Vec<String>,
}

/// Execute the build command.
///
/// With no names every configured build runs. The first failing build stops the batch.
/// In JSON mode the build tool's own output goes to stderr so stdout stays parseable.
pub fn cmd_build(config: Option<&Path>, args: &BuildArgs, output: OutputFormat) -> Result<()> {
  let start = Instant::now();

  let mut project = load_project(config)?;
  if let Some(bin) = &args.bin {
    project.bin = Some(bin.clone());
  }

  let tool_output = if output.is_json() {
    ToolOutput::Stderr
  } else {
    ToolOutput::Stdout
  };
  let builder = Builder::new(&project).with_tool_output(tool_output);
  let builder = if args.keep_all {
    builder.with_exclude(KeepAll)
  } else {
    builder.with_exclude(exclude_policy(args)?)
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = rt.block_on(builder.build(&args.names)).context("Build failed")?;

  debug!(builds = report.builds.len(), "build batch finished");

  if output.is_json() {
    print_json(&report)?;
  } else {
    println!();
    print_success("Build complete!");
    for build in &report.builds {
      print_item(&format!(
        "{}: {} files, {} directories, {} skipped",
        build.name, build.stats.files, build.stats.directories, build.stats.skipped
      ));
    }
    print_stat("Destination", &project.dest_dir.display().to_string());
    print_stat("Duration", &format_duration(start.elapsed()));
  }

  Ok(())
}

fn exclude_policy(args: &BuildArgs) -> Result<PatternExclude> {
  let mut policy = PatternExclude::default();
  for pattern in &args.exclude_file {
    policy = policy
      .skip_files(pattern)
      .with_context(|| format!("Invalid --exclude-file pattern: {}", pattern))?;
  }
  for pattern in &args.exclude_dir {
    policy = policy
      .skip_dirs(pattern)
      .with_context(|| format!("Invalid --exclude-dir pattern: {}", pattern))?;
  }
  Ok(policy)
}
