//! Raw bundler runs against a scripted bundler.

#![cfg(unix)]

mod common;

use common::FakeToolchain;
use sfx_bundler::bundler::{Bundler, Error, RunOptions, StdioMode};
use std::path::Path;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

#[tokio::test]
async fn success_captures_both_streams_exactly() {
    let fake = FakeToolchain::new("printf 'hello\\nworld'\nprintf 'warn' >&2\nexit 0");
    let bundler = Bundler::new(fake.toolchain.clone());

    let result = bundler.run(&[], &RunOptions::default()).await.unwrap();

    assert_eq!(result.code, 0);
    assert_eq!(result.stdout, "hello\nworld");
    assert_eq!(result.stderr, "warn");
}

#[tokio::test]
async fn non_zero_exit_is_a_run_error() {
    let fake = FakeToolchain::new("printf 'partial'\nprintf 'bad archive' >&2\nexit 2");
    let bundler = Bundler::new(fake.toolchain.clone());
    let args = strings(&["-exe", "app.exe", "-dir", "src"]);

    let err = bundler.run(&args, &RunOptions::default()).await.unwrap_err();

    assert_eq!(err.exit_code(), Some(2));
    assert!(err.to_string().ends_with("bad archive"));
    let Error::Run(run) = err else {
        panic!("expected a run error, got {err:?}");
    };
    assert_eq!(run.code, Some(2));
    assert_eq!(run.stdout, "partial");
    assert_eq!(run.stderr, "bad archive");
    assert_eq!(run.command, fake.toolchain.bundler_path());
    assert_eq!(run.args, args);
    assert_eq!(run.message, "SFX bundler exited with code 2\nbad archive");
}

#[tokio::test]
async fn arguments_are_passed_verbatim() {
    let fake = FakeToolchain::new("for a in \"$@\"; do printf '%s\\n' \"$a\" >> \"$LOG\"; done");
    let bundler = Bundler::new(fake.toolchain.clone());

    bundler
        .run(
            &strings(&["-args", "--flag value", "-v"]),
            &RunOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(fake.log(), "-args\n--flag value\n-v\n");
}

#[tokio::test]
async fn working_directory_is_applied() {
    let fake = FakeToolchain::new("pwd -P");
    let bundler = Bundler::new(fake.toolchain.clone());
    let cwd = fake.path().join("work");
    std::fs::create_dir_all(&cwd).unwrap();

    let options = RunOptions {
        cwd: Some(cwd.clone()),
        ..Default::default()
    };
    let result = bundler.run(&[], &options).await.unwrap();

    assert_eq!(
        Path::new(result.stdout.trim()),
        cwd.canonicalize().unwrap().as_path()
    );
}

#[tokio::test]
async fn ignore_mode_captures_nothing() {
    let fake = FakeToolchain::new("echo noisy\necho louder >&2");
    let bundler = Bundler::new(fake.toolchain.clone());

    let options = RunOptions {
        stdio: StdioMode::Ignore,
        ..Default::default()
    };
    let result = bundler.run(&[], &options).await.unwrap();

    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
}

#[tokio::test]
async fn large_output_on_both_streams_does_not_block() {
    let fake = FakeToolchain::new(
        "head -c 200000 /dev/zero | tr '\\0' 'o'\nhead -c 200000 /dev/zero | tr '\\0' 'e' >&2",
    );
    let bundler = Bundler::new(fake.toolchain.clone());

    let result = bundler.run(&[], &RunOptions::default()).await.unwrap();

    assert_eq!(result.stdout.len(), 200_000);
    assert_eq!(result.stderr.len(), 200_000);
    assert!(result.stdout.chars().all(|c| c == 'o'));
}

#[tokio::test]
async fn missing_bundler_is_a_spawn_error() {
    let fake = FakeToolchain::new("exit 0");
    std::fs::remove_file(fake.toolchain.bundler_path()).unwrap();
    let bundler = Bundler::new(fake.toolchain.clone());

    let err = bundler.run(&[], &RunOptions::default()).await.unwrap_err();

    assert!(matches!(err, Error::Spawn { .. }), "{err:?}");
    assert!(err.exit_code().is_none());
}
