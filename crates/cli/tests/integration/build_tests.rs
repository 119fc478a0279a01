//! Build command integration tests.

use predicates::prelude::*;
use serial_test::serial;

use super::common::{TOOL_LINE, TestEnv};

const APP: &str = r#"{"layers": {"app/main": {"include": ["app/main"]}}}"#;

#[test]
#[serial]
fn build_copies_release_and_drops_byproducts() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(
    &[
      ("app/main.js", "define(1)"),
      ("app/main.js.uncompressed.js", "define(function () { return 1; })"),
      ("app/main.js.consoleStripped.js", "define(1)"),
      ("app/nls/main_fr.js", "define({})"),
    ],
    0,
  );

  env
    .dojo_cmd()
    .args(["build", "app"])
    .assert()
    .success()
    .stdout(predicate::str::contains(TOOL_LINE))
    .stdout(predicate::str::contains("Build complete"))
    .stdout(predicate::str::contains("app: 2 files, 2 directories, 2 skipped"));

  let dest = env.dest_path();
  assert_eq!(std::fs::read_to_string(dest.join("app/main.js")).unwrap(), "define(1)");
  assert!(dest.join("app/nls/main_fr.js").is_file());
  assert!(!dest.join("app/main.js.uncompressed.js").exists());
  assert!(!dest.join("app/main.js.consoleStripped.js").exists());
  assert!(!env.release_path().exists());
}

#[test]
#[serial]
fn build_all_when_no_names_given() {
  let env = TestEnv::new(&[("mobile", APP), ("desktop", APP)]);
  env.install_build_script(&[("main.js", "x")], 0);

  env.dojo_cmd().arg("build").assert().success();

  let profiles = env.src_path().join("profiles");
  assert_eq!(
    env.invocations(),
    vec![
      format!("--profile {}", profiles.join("desktop.profile.js").display()),
      format!("--profile {}", profiles.join("mobile.profile.js").display()),
    ]
  );
}

#[test]
#[serial]
fn build_forwards_bin_flag() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(&[], 0);

  env
    .dojo_cmd()
    .args(["build", "--bin", "/usr/local/bin/node"])
    .assert()
    .success();

  let invocations = env.invocations();
  assert_eq!(invocations.len(), 1);
  assert!(invocations[0].ends_with("--bin /usr/local/bin/node"));
}

#[test]
#[serial]
fn build_keep_all_copies_everything() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(&[("main.js", "a"), ("main.js.uncompressed.js", "b")], 0);

  env.dojo_cmd().args(["build", "--keep-all"]).assert().success();

  assert!(env.dest_path().join("main.js.uncompressed.js").is_file());
}

#[test]
#[serial]
fn build_exclude_dir_prunes_subtree() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(&[("dojo/dojo.js", "d"), ("dojo/tests/unit/a.js", "t")], 0);

  env
    .dojo_cmd()
    .args(["build", "--exclude-dir", "/tests$"])
    .assert()
    .success();

  assert!(env.dest_path().join("dojo/dojo.js").is_file());
  assert!(!env.dest_path().join("dojo/tests").exists());
}

#[test]
#[serial]
fn build_failure_stops_batch() {
  let env = TestEnv::new(&[("a", APP), ("b", APP)]);
  env.install_build_script(&[], 2);

  env
    .dojo_cmd()
    .arg("build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("build command failed"));

  assert_eq!(env.invocations().len(), 1);
}

#[test]
#[serial]
fn build_json_report() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(&[("main.js", "x"), ("main.js.uncompressed.js", "y")], 0);

  let output = env.dojo_cmd().args(["build", "-o", "json"]).output().unwrap();

  assert!(output.status.success());
  assert!(String::from_utf8_lossy(&output.stderr).contains(TOOL_LINE));
  assert!(!String::from_utf8_lossy(&output.stdout).contains(TOOL_LINE));
  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["builds"][0]["name"], "app");
  assert_eq!(report["builds"][0]["stats"]["files"], 1);
  assert_eq!(report["builds"][0]["stats"]["skipped"], 1);
}

#[test]
#[serial]
fn build_with_explicit_config_outside_project() {
  let env = TestEnv::new(&[("app", APP)]);
  env.install_build_script(&[("main.js", "x")], 0);
  let elsewhere = tempfile::TempDir::new().unwrap();

  env
    .dojo_cmd()
    .current_dir(elsewhere.path())
    .arg("--config")
    .arg(&env.config_path)
    .arg("build")
    .assert()
    .success();

  assert!(env.dest_path().join("main.js").is_file());
  assert!(!elsewhere.path().join("dojo-build.json").exists());
}
