//! Update gate and self-relaunch behavior through the real binary.
//!
//! The updater is faked via `WRENCH_UPDATER` pointing at local scripts, so
//! these tests exercise the full cycle (updater child, state write,
//! re-invocation) without a network or a real checkout.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wrench(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wrench").unwrap();
    cmd.env("WRENCH_HOME", home);
    cmd
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn setup_profile(home: &Path, root: &Path) {
    let dir = home.join("profiles");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("testing.toml"),
        format!(
            "root = \"{}\"\nout = \"Testing\"\nexecutable = \"app\"\n",
            root.display()
        ),
    )
    .unwrap();
    fs::write(home.join("active"), "testing\n").unwrap();
}

fn read_state(home: &Path) -> Option<i64> {
    fs::read_to_string(home.join("last-update-check"))
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[test]
fn due_check_runs_updater_and_records_cycle_start_time() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());

    let marker = home.path().join("updater-ran");
    let updater = write_script(
        home.path(),
        "updater.sh",
        &format!("touch {}", marker.display()),
    );

    let before = now_ms();
    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("testing"));
    let after = now_ms();

    assert!(marker.exists(), "updater child never ran");
    let recorded = read_state(home.path()).expect("state file not written");
    assert!(recorded >= before && recorded <= after);
}

#[test]
fn recent_check_skips_the_updater_entirely() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());
    fs::write(
        home.path().join("last-update-check"),
        format!("{}\n", now_ms() - 1000),
    )
    .unwrap();

    let marker = home.path().join("updater-ran");
    let updater = write_script(
        home.path(),
        "updater.sh",
        &format!("touch {}", marker.display()),
    );

    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("show")
        .assert()
        .success();

    assert!(!marker.exists(), "updater ran inside the throttle window");
}

#[test]
fn disable_marker_suppresses_even_the_first_run_check() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());
    fs::write(home.path().join("disable-auto-updates"), "").unwrap();

    let marker = home.path().join("updater-ran");
    let updater = write_script(
        home.path(),
        "updater.sh",
        &format!("touch {}", marker.display()),
    );

    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("show")
        .assert()
        .success();

    assert!(!marker.exists());
    assert_eq!(read_state(home.path()), None);
}

#[test]
fn failing_updater_still_advances_the_throttle_and_runs_the_command() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());

    let updater = write_script(home.path(), "updater.sh", "exit 3");

    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("show")
        .assert()
        .success()
        .stderr(predicate::str::contains("continuing without update"));

    assert!(read_state(home.path()).is_some());
}

#[test]
fn updater_stdout_lands_on_stderr_not_stdout() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());

    let updater = write_script(home.path(), "updater.sh", "echo pulling-new-wrench");

    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("pulling-new-wrench").not())
        .stderr(predicate::str::contains("pulling-new-wrench"));
}

#[test]
fn relaunch_propagates_the_reinvoked_childs_exit_code() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());

    // App exits 7; the update cycle relaunches `wrench start`, whose child
    // status must surface as the outer process's own exit code.
    let out_dir = root.path().join("src").join("out").join("Testing");
    fs::create_dir_all(&out_dir).unwrap();
    write_script(&out_dir, "app", "exit 7");

    let updater = write_script(home.path(), "updater.sh", "exit 0");

    wrench(home.path())
        .env("WRENCH_UPDATER", updater.display().to_string())
        .arg("start")
        .assert()
        .code(7);
}

#[test]
fn updater_spawn_failure_is_fatal_and_reported() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    setup_profile(home.path(), root.path());

    wrench(home.path())
        .env("WRENCH_UPDATER", "/nonexistent/wrench-updater")
        .arg("show")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Update failed"));
}
