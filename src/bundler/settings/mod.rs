//! Configuration types for bundle and run operations.
//!
//! This module provides the option structs passed per invocation, the
//! architecture and platform enums used to locate toolchain binaries, and
//! the hook type for the pre/post bundle extension points.

mod arch;
mod builder;
mod hooks;
mod options;

pub use arch::{Arch, HostArch, HostOs};
pub use builder::BundleOptionsBuilder;
pub use hooks::{Hook, HookContext, HookFuture};
pub use options::{BootstrapperType, BundleOptions, RunOptions, StdioMode};
