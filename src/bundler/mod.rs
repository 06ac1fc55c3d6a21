//! Self-extracting executable bundling.
//!
//! Drives the prebuilt sfx toolchain: a bootstrapper stub is copied to the
//! destination and the external `bundler` binary appends the project
//! directory to it.

pub mod builder;
pub mod error;
pub mod process;
pub mod settings;
pub mod toolchain;
pub mod utils;

pub use builder::{Bundler, bundle_args};
pub use error::{Context, Error, ErrorExt, Result};
pub use process::{RunError, RunResult, run};
pub use settings::{
    Arch, BootstrapperType, BundleOptions, BundleOptionsBuilder, Hook, HookContext, HostArch,
    HostOs, RunOptions, StdioMode,
};
pub use toolchain::{TOOLCHAIN_DIR_NAME, Toolchain};
