//! End-to-end CLI tests against a fake MEGAcmd binary.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A stand-in for `mega-exec` that answers a handful of sub-commands.
const FAKE_MEGA_EXEC: &str = r#"#!/bin/sh
case "$1" in
  version) echo "MEGAcmd version: 1.6.3.0: code 1060300" ;;
  whoami) echo "Account e-mail: me@example.com" ;;
  pwd) echo "/Documents" ;;
  df)
    echo "Cloud drive:          1048576 in       10 file(s) and        2 folder(s)"
    echo "USED STORAGE:         1048576               0.49% of 214748364"
    ;;
  ls)
    echo "FLAGS VERS      SIZE DATE               HANDLE     NAME"
    echo "d---    -            - 07Jan2024 13:45:10 H:AbCdEfGh Documents"
    echo "----    1      1.00 KB 01Feb2024 10:00:00 H:Ab12Cd34 notes.txt"
    ;;
  cat) echo "could not find $2" >&2; exit 53 ;;
  cd) exit 53 ;;
  session) echo "Not logged in." >&2; exit 57 ;;
  logout) echo "Not logged in." >&2; exit 57 ;;
  *) echo "unsupported: $*" >&2; exit 59 ;;
esac
"#;

struct Fixture {
    _dir: TempDir,
    binary: PathBuf,
    config_dir: PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let binary = dir.path().join("mega-exec");
    fs::write(&binary, FAKE_MEGA_EXEC).unwrap();
    fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    Fixture {
        _dir: dir,
        binary,
        config_dir,
    }
}

fn megactl(fx: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("megactl").unwrap();
    cmd.env("MEGACTL_BINARY", &fx.binary)
        .env("MEGACTL_CONFIG_DIR", &fx.config_dir)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_exits_zero() {
    Command::cargo_bin("megactl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MEGAcmd"));
}

#[test]
fn no_args_shows_help() {
    Command::cargo_bin("megactl").unwrap().assert().failure();
}

#[test]
fn whoami_prints_email() {
    let fx = fixture();
    megactl(&fx)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("me@example.com"));
}

#[test]
fn ls_json_output() {
    let fx = fixture();
    let output = megactl(&fx)
        .args(["--json", "ls", "/"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let entries: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(entries[0]["name"], "Documents");
    assert_eq!(entries[0]["is_directory"], true);
    assert_eq!(entries[1]["handle"], "H:Ab12Cd34");
    assert_eq!(entries[1]["size"], "1.00 KB");
}

#[test]
fn df_human_output() {
    let fx = fixture();
    megactl(&fx)
        .arg("df")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud drive"))
        .stdout(predicate::str::contains("1.0 MB in 10 files and 2 folders"));
}

#[test]
fn cat_missing_file_fails() {
    let fx = fixture();
    megactl(&fx)
        .args(["cat", "/missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote path not found: /missing.txt"));
}

#[test]
fn cd_into_missing_folder_fails() {
    let fx = fixture();
    megactl(&fx)
        .args(["cd", "/nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such remote folder"));
}

#[test]
fn logout_failure_exits_nonzero_in_json_mode() {
    let fx = fixture();
    megactl(&fx)
        .args(["--json", "logout"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Logout failed"));
}

#[test]
fn session_when_logged_out_is_null() {
    let fx = fixture();
    megactl(&fx)
        .args(["--json", "session"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn missing_binary_reports_configuration_error() {
    let fx = fixture();
    megactl(&fx)
        .env("MEGACTL_BINARY", fx.config_dir.join("no-such-mega-exec"))
        .arg("pwd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MEGAcmd executable not found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn config_file_selects_binary() {
    let fx = fixture();
    write_config(
        &fx.config_dir,
        &format!("binary = \"{}\"\ncheck_binary = false\n", fx.binary.display()),
    );

    Command::cargo_bin("megactl")
        .unwrap()
        .env_remove("MEGACTL_BINARY")
        .env("MEGACTL_CONFIG_DIR", &fx.config_dir)
        .arg("pwd")
        .assert()
        .success()
        .stdout(predicate::str::diff("/Documents\n"));
}

#[test]
fn config_output_json() {
    let fx = fixture();
    write_config(&fx.config_dir, "output = \"json\"\n");

    megactl(&fx)
        .arg("pwd")
        .assert()
        .success()
        .stdout(predicate::str::diff("\"/Documents\"\n"));
}

#[test]
fn invalid_config_fails() {
    let fx = fixture();
    write_config(&fx.config_dir, "output = \"xml\"\n");

    megactl(&fx)
        .arg("pwd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn config_path_prints_file() {
    let fx = fixture();
    megactl(&fx)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate() {
    Command::cargo_bin("megactl")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("megactl"));
}

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("config.toml"), content).unwrap();
}
