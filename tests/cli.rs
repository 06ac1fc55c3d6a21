//! `sfxbundler` binary tests.
//!
//! The fake toolchain is laid out for an x64 host with a plain `bundler`
//! executable, so these only run where that is the real host.

#![cfg(all(unix, target_arch = "x86_64", not(target_os = "macos")))]

mod common;

use assert_cmd::Command;
use common::{FakeToolchain, STUB};
use predicates::prelude::*;

fn sfxbundler(fake: &FakeToolchain) -> Command {
    let mut cmd = Command::cargo_bin("sfxbundler").unwrap();
    cmd.env("SFX_BIN_DIR", fake.toolchain.root());
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("sfxbundler")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle"))
        .stdout(predicate::str::contains("install"));
}

#[test]
fn run_passes_exit_code_through() {
    let fake = FakeToolchain::new("printf '%s ' \"$@\" >> \"$LOG\"\nexit 4");

    sfxbundler(&fake)
        .args(["run", "-exe", "a.exe", "-v"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exited with code 4"));

    assert_eq!(fake.log(), "-exe a.exe -v ");
}

#[test]
fn bundle_prints_bundler_output() {
    let fake = FakeToolchain::new("echo \"bundled $6\"");
    let dest = fake.path().join("dist/app.exe");

    sfxbundler(&fake)
        .args(["bundle", "--exe"])
        .arg(&dest)
        .arg("--dir")
        .arg(fake.path())
        .assert()
        .success()
        .stdout("bundled app\n");

    assert!(std::fs::read(&dest).unwrap().starts_with(STUB));
}

#[test]
fn bundle_reports_bundler_failure() {
    let fake = FakeToolchain::new("echo 'bad archive' >&2\nexit 2");

    sfxbundler(&fake)
        .args(["bundle", "--exe"])
        .arg(fake.path().join("app.exe"))
        .arg("--dir")
        .arg(fake.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad archive"));
}

#[test]
fn bundle_rejects_missing_source_dir() {
    let fake = FakeToolchain::new("echo bundler >> \"$LOG\"");

    sfxbundler(&fake)
        .args(["bundle", "--exe", "app.exe", "--dir"])
        .arg(fake.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Source directory does not exist"));

    assert!(fake.log().is_empty());
}

#[test]
fn config_file_supplies_bundle_defaults() {
    let fake = FakeToolchain::new("exit 0");
    let config = fake.path().join("sfx.toml");
    std::fs::write(&config, "[bundle]\narch = \"i386\"\ntype = \"sfxv\"\n").unwrap();
    let dest = fake.path().join("app.exe");

    sfxbundler(&fake)
        .arg("--config")
        .arg(&config)
        .args(["bundle", "--exe"])
        .arg(&dest)
        .arg("--dir")
        .arg(fake.path())
        .assert()
        .success();

    assert_eq!(std::fs::read(&dest).unwrap(), [STUB, b" i386 sfxv"].concat());
}
