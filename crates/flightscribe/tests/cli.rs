//! Runs the `flightscribe` binary against config files on disk.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const VALID: &str = "[api]\ntimeout_secs = 2\n\n[fallback]\nenabled = false\n";
const INVALID: &str = "[api]\ntimeout_secs = 0\n";

/// A scratch home directory with an optional default config file.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn write_default(&self, contents: &str) -> PathBuf {
        self.write("xdg/flightscribe/config.toml", contents)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_flightscribe"))
            .args(args)
            .env_clear()
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .output()
            .unwrap()
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn validate_invalid_file_exits_non_zero() {
    let sandbox = Sandbox::new();
    let bad = sandbox.write("bad.toml", INVALID);

    let output = sandbox.run(&["config", "validate", "--file", path_arg(&bad)]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("timeout_secs"));
    assert!(!stdout(&output).contains("Configuration is valid."));
}

#[test]
fn validate_missing_file_exits_non_zero() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("missing.toml");

    let output = sandbox.run(&["config", "validate", "--file", path_arg(&missing)]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("does not exist"));
}

#[test]
fn validate_file_ignores_broken_global_config() {
    let sandbox = Sandbox::new();
    let bad = sandbox.write("bad.toml", INVALID);
    let good = sandbox.write("good.toml", VALID);

    let output = sandbox.run(&[
        "-c",
        path_arg(&bad),
        "config",
        "validate",
        "--file",
        path_arg(&good),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration is valid."));
}

#[test]
fn validate_without_file_checks_global_config() {
    let sandbox = Sandbox::new();
    let bad = sandbox.write("bad.toml", INVALID);

    let output = sandbox.run(&["-c", path_arg(&bad), "config", "validate"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains(path_arg(&bad)));
}

#[test]
fn config_path_does_not_load_config() {
    let sandbox = Sandbox::new();
    let bad = sandbox.write("bad.toml", INVALID);

    let output = sandbox.run(&["-c", path_arg(&bad), "config", "path"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), path_arg(&bad));
}

#[test]
fn table_does_not_load_config() {
    let sandbox = Sandbox::new();
    sandbox.write_default(INVALID);

    let output = sandbox.run(&["table"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("AI123"));
}

#[test]
fn lookup_fails_on_invalid_config() {
    let sandbox = Sandbox::new();
    sandbox.write_default(INVALID);

    let output = sandbox.run(&["lookup", "AI123", "--offline"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("loading configuration"));
}

#[test]
fn config_flag_replaces_default_file() {
    let sandbox = Sandbox::new();
    sandbox.write_default(INVALID);
    let good = sandbox.write("good.toml", VALID);

    // The custom file turns the fallback table off, so even a table flight is missing
    let output = sandbox.run(&["-c", path_arg(&good), "lookup", "AI123", "--offline"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Flight AI123 not found in database.");
}

#[test]
fn default_file_is_used_without_flag() {
    let sandbox = Sandbox::new();
    sandbox.write_default(VALID);

    let output = sandbox.run(&["lookup", "AI123", "--offline"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "Flight AI123 not found in database.");

    let output = sandbox.run(&["config", "show", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let shown: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(shown["api"]["timeout_secs"], 2);
    assert_eq!(shown["fallback"]["enabled"], false);
}
