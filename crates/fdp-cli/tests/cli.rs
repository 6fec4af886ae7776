//! End-to-end tests for the `fdp` binary.
//!
//! Each test writes its fuzz input (and recipe, where needed) into a temp
//! dir, runs the real binary and checks stdout, stderr and the exit code.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn fdp() -> Command {
    let mut cmd = Command::cargo_bin("fdp").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// decode
// ============================================================================

#[test]
fn decode_with_recipe_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "crash.bin", &[0x8A, 0x19, 0x4A]);
    let recipe = dir.path().join("harness.recipe");
    fs::write(&recipe, "# header\nu8\nbytes:2 # body\n").unwrap();

    fdp()
        .arg("decode")
        .arg(&input)
        .arg("--recipe-file")
        .arg(&recipe)
        .arg("--hide-cursors")
        .assert()
        .success()
        .stdout("#0   u8               = 74\n#1   bytes:2          = [2] 8a19\nremaining: 0\n");
}

#[test]
fn decode_json_is_parseable_document() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "crash.bin", b"hi!\x01");

    fdp()
        .arg("decode")
        .arg(&input)
        .args(["--recipe", "bool rest_str", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"remaining\": 0"))
        .stdout(predicate::str::ends_with("}\n"));
}

#[test]
fn decode_warns_when_input_runs_out_early() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.bin", &[0x01]);

    fdp()
        .arg("decode")
        .arg(&input)
        .args(["--recipe", "u8 u8 u8"])
        .assert()
        .success()
        .stderr(predicate::str::contains("input exhausted early"));
}

#[test]
fn decode_invalid_recipe_exits_1_with_error_chain() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "crash.bin", &[0x00]);

    fdp()
        .arg("decode")
        .arg(&input)
        .args(["--recipe", "u8 nope"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "error: invalid recipe: step 1: unknown step kind \"nope\"",
        ));
}

#[test]
fn decode_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();

    fdp()
        .arg("decode")
        .arg(dir.path().join("does-not-exist"))
        .args(["--recipe", "u8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn decode_requires_a_recipe() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "crash.bin", &[0x00]);

    fdp()
        .arg("decode")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn inspect_shows_back_window_in_read_order() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "four.bin", &[0x01, 0x02, 0x03, 0x04]);

    fdp()
        .arg("inspect")
        .arg(&input)
        .args(["--bytes", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 bytes)"))
        .stdout(predicate::str::contains("  0003  04 03 02 01 "))
        .stdout(predicate::str::contains("  u32   67305985\n"))
        .stdout(predicate::str::contains("  i64   -9223372036787469823\n"));
}
