use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_ok(config_home: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("dialsift")
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_json(config_home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("dialsift")
        .env("XDG_CONFIG_HOME", config_home)
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_clean_strips_formatting() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_ok(temp.path(), &["clean", "8 (800) 555"]);
    assert_eq!(out, "8800555\n");
}

#[test]
fn cli_clean_multiple_inputs_in_order() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_ok(temp.path(), &["clean", "+7 800 555", "7+800", "++79"]);
    assert_eq!(out, "+7800555\n7800\n+79\n");
}

#[test]
fn cli_clean_reads_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("dialsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("clean")
        .write_stdin("+1 (415) 555-1212\nabc123\n")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout, "+14155551212\n123\n");
}

#[test]
fn cli_clean_json_single_object() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json(temp.path(), &["clean", "+7 800 555"]);
    assert_eq!(value["raw"], "+7 800 555");
    assert_eq!(value["cleaned"], "+7800555");
}

#[test]
fn cli_clean_json_array_for_multiple_inputs() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json(temp.path(), &["clean", "8 (800) 555", "abc"]);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["cleaned"], "8800555");
    assert_eq!(items[1]["cleaned"], "");
}

#[test]
fn cli_clean_strict_fails_on_empty_result() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("dialsift")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["clean", "--strict", "abc"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no phone characters"));
}

#[test]
fn cli_clean_keep_glyphs_flag() {
    let temp = TempDir::new().expect("temp dir");
    let out = run_ok(temp.path(), &["clean", "--keep-glyphs", "+٧٨ ٩"]);
    assert_eq!(out, "+٧٨٩\n");
}

#[test]
fn cli_clean_digit_mode_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("dialsift");
    fs::create_dir_all(&config_dir).expect("config dir");
    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, "digits = \"keep\"\n").expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&config_path).expect("metadata").permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&config_path, perms).expect("chmod");
    }

    let out = run_ok(temp.path(), &["clean", "٧٨ ٩"]);
    assert_eq!(out, "٧٨٩\n");
}
