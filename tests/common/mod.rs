//! Shared helpers for integration tests: a scratch toolchain whose
//! `bundler` is a shell script.

#![allow(dead_code)]

use sfx_bundler::bundler::{HostArch, HostOs, Toolchain};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bytes written to every fake bootstrapper stub.
pub const STUB: &[u8] = b"MZ fake bootstrapper";

/// A toolchain root in a temporary directory.
pub struct FakeToolchain {
    pub dir: TempDir,
    pub toolchain: Toolchain,
}

impl FakeToolchain {
    /// Creates stubs for both architectures and a bundler running `script`.
    ///
    /// `script` is the body of a POSIX shell script. `$LOG` inside it points
    /// at [`FakeToolchain::log_path`].
    pub fn new(script: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("sfx-bin");

        for arch in ["x64", "i386"] {
            std::fs::create_dir_all(root.join(arch)).unwrap();
            for ty in ["sfx", "sfxv"] {
                let stub = [STUB, format!(" {arch} {ty}").as_bytes()].concat();
                std::fs::write(root.join(arch).join(format!("{ty}.exe")), stub).unwrap();
            }
        }

        let toolchain = Toolchain::for_host(&root, HostArch::X64, HostOs::Other);
        let log = dir.path().join("calls.log");
        write_script(
            toolchain.bundler_path(),
            &format!("#!/bin/sh\nLOG='{}'\n{}\n", log.display(), script),
        );

        Self { dir, toolchain }
    }

    /// File the fake bundler and hooks append to.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Contents of the call log, empty if nothing was written.
    pub fn log(&self) -> String {
        std::fs::read_to_string(self.log_path()).unwrap_or_default()
    }

    /// Scratch directory for outputs.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Writes an executable script, closing it before it can be spawned.
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, body).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Appends one line to `path`.
pub fn append_line(path: &Path, line: &str) {
    use std::io::Write;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    writeln!(file, "{line}").unwrap();
}
