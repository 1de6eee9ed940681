//! Tests for the `palettes_cli` binary.
//!
//! Tests cover:
//! 1. Listing every group and palette
//! 2. One palette printed as a JSON array
//! 3. Exit code 1 with a message for unknown groups and palettes
//! 4. Exit code 2 with the usage line for malformed arguments
//! 5. `--json` to stdout and `--json -o` to a file
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use assert_cmd::Command;
use color_palettes::registry_json;
use test_case::test_case;

fn cli() -> Command {
    Command::cargo_bin("palettes_cli").expect("palettes_cli binary is built")
}

fn stderr_of(args: &[&str], code: i32) -> String {
    let assert = cli().args(args).assert().code(code);
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn test_prints_palette_as_json_array() {
    cli().args(["PaulTol", "bright"]).assert().success().stdout(
        "[\"#4477AA\",\"#EE6677\",\"#228833\",\"#CCBB44\",\"#66CCEE\",\"#AA3377\",\"#BBBBBB\"]\n",
    );
}

#[test]
fn test_prints_japan_cudo_palette() {
    let assert = cli().args(["JapanCUDO", "accent"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let colors: Vec<String> = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(colors.len(), 9);
    assert_eq!(colors[0], "#ff4b00");
}

#[test]
fn test_lists_all_palettes() {
    let assert = cli().assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.starts_with("PaulTol\n"));
    assert!(stdout.contains("JapanCUDO\n"));
    assert!(stdout.contains("smoothrainbow"));
    assert_eq!(stdout.lines().count(), 2 + 17 + 2);
}

#[test]
fn test_unknown_palette_exits_1() {
    let stderr = stderr_of(&["PaulTol", "doesNotExist"], 1);
    assert!(stderr.contains("Unknown palette name: PaulTol/doesNotExist"), "{stderr}");
}

#[test]
fn test_unknown_group_exits_1() {
    let stderr = stderr_of(&["Nonexistent", "bright"], 1);
    assert!(stderr.contains("Unknown palette group: Nonexistent"), "{stderr}");
}

#[test_case(&["PaulTol"] ; "group only")]
#[test_case(&["--json", "-o"] ; "json output without path")]
#[test_case(&["--json", "--json"] ; "json flag twice")]
#[test_case(&["--json", "-x", "out.json"] ; "unknown json option")]
#[test_case(&["PaulTol", "bright", "extra"] ; "too many arguments")]
fn test_bad_usage_exits_2(args: &[&str]) {
    let stderr = stderr_of(args, 2);
    assert!(stderr.starts_with("Usage: palettes_cli"), "{stderr}");
}

#[test]
fn test_json_to_stdout() {
    let expected = format!("{}\n", registry_json(true).unwrap());
    cli().arg("--json").assert().success().stdout(expected);
}

#[test]
fn test_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palettes.json");
    let path_arg = path.to_str().unwrap();

    cli().args(["--json", "-o", path_arg]).assert().success().stdout("");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, registry_json(true).unwrap());
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["PaulTol"].as_object().unwrap().len(), 17);
    assert_eq!(value["JapanCUDO"].as_object().unwrap().len(), 2);
}
