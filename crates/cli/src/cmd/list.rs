use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::cmd::load_project;
use crate::output::{OutputFormat, print_info, print_item, print_json};

#[derive(Serialize)]
struct BuildEntry<'a> {
  name: &'a str,
  action: &'a str,
  layers: usize,
  packages: usize,
}

pub fn cmd_list(config: Option<&Path>, output: OutputFormat) -> Result<()> {
  let project = load_project(config)?;

  let entries: Vec<_> = project
    .build_configs
    .iter()
    .map(|(name, build)| BuildEntry {
      name,
      action: &build.action,
      layers: build.layers.len(),
      packages: build.packages.len(),
    })
    .collect();

  if output.is_json() {
    return print_json(&entries);
  }

  if entries.is_empty() {
    print_info("No build configs defined.");
    return Ok(());
  }

  for entry in &entries {
    print_item(&format!(
      "{} ({} layers, {} packages)",
      entry.name, entry.layers, entry.packages
    ));
  }

  Ok(())
}
