//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Line every fake build script prints to its stdout.
pub const TOOL_LINE: &str = "release:  Building layer app/main";

/// Isolated project: a config file, a fake toolkit under `src/`, and `dest/`.
pub struct TestEnv {
  pub temp: TempDir,
  pub config_path: PathBuf,
}

impl TestEnv {
  /// Create a project whose config declares `builds` (name, BuildConfig JSON).
  pub fn new(builds: &[(&str, &str)]) -> Self {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("dojo-build.json");

    let builds: Vec<String> = builds
      .iter()
      .map(|(name, body)| format!("\"{}\": {}", name, body))
      .collect();
    let config = format!(
      r#"{{"srcDir": "src", "destDir": "dest", "buildConfigs": {{{}}}}}"#,
      builds.join(", ")
    );
    std::fs::write(&config_path, config).unwrap();

    let env = Self { temp, config_path };
    std::fs::create_dir_all(env.dest_path()).unwrap();
    env
  }

  fn root(&self) -> PathBuf {
    let p = self.temp.path().to_path_buf();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  pub fn src_path(&self) -> PathBuf {
    self.root().join("src")
  }

  pub fn dest_path(&self) -> PathBuf {
    self.root().join("dest")
  }

  pub fn release_path(&self) -> PathBuf {
    self.dest_path().join("dojoBuilderTMP")
  }

  /// File the fake build script appends its arguments to, one line per run.
  pub fn invocations_path(&self) -> PathBuf {
    self.root().join("invocations.log")
  }

  pub fn invocations(&self) -> Vec<String> {
    std::fs::read_to_string(self.invocations_path())
      .unwrap_or_default()
      .lines()
      .map(|l| l.to_string())
      .collect()
  }

  /// Install a fake `util/buildscripts/build.sh` that logs its arguments,
  /// prints a line, writes `files` into the release directory, then exits with `exit_code`.
  #[cfg(unix)]
  pub fn install_build_script(&self, files: &[(&str, &str)], exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let mut body = String::from("#!/bin/sh\nset -e\n");
    body.push_str(&format!("echo \"$@\" >> '{}'\n", self.invocations_path().display()));
    body.push_str(&format!("echo '{}'\n", TOOL_LINE));
    // Give the detached echo task time to pass the line on before the build moves ahead.
    body.push_str("sleep 0.5\n");
    for (relative, content) in files {
      let path = self.release_path().join(relative);
      body.push_str(&format!("mkdir -p '{}'\n", path.parent().unwrap().display()));
      body.push_str(&format!("printf '%s' '{}' > '{}'\n", content, path.display()));
    }
    body.push_str(&format!("exit {}\n", exit_code));

    let script = self.src_path().join("util/buildscripts/build.sh");
    std::fs::create_dir_all(script.parent().unwrap()).unwrap();
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
  }

  /// Get a pre-configured Command for the dojo-build binary.
  ///
  /// Runs from the project root so `dojo-build.json` is picked up, with
  /// `DOJO_BUILD_CONFIG` cleared.
  pub fn dojo_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("dojo-build");
    cmd.env_remove("DOJO_BUILD_CONFIG");
    cmd.current_dir(self.temp.path());
    cmd
  }
}
