//! Self-extracting executable bundler built on the sfx toolchain.
//!
//! This library drives the prebuilt sfx binaries:
//! - [`bundler`] copies a bootstrapper stub and runs the external bundler
//! - [`provision`] installs the binaries from GitHub releases
//! - [`cli`] is the `sfxbundler` command line front end
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod config;
pub mod error;
pub mod provision;

// Re-export commonly used types
pub use bundler::{BundleOptions, Bundler, RunError, RunOptions, RunResult, Toolchain};
pub use error::{BundlerError, CliError, Result};
