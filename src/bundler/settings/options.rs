//! Per-invocation options for bundling and raw runs.

use super::{Arch, Hook};
use std::{fmt, path::PathBuf, str::FromStr};

/// Bootstrapper stub flavour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootstrapperType {
    /// Silent extraction.
    #[default]
    Sfx,
    /// Verbose extraction.
    Sfxv,
}

impl BootstrapperType {
    /// Stub file stem (`sfx` or `sfxv`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sfx => "sfx",
            Self::Sfxv => "sfxv",
        }
    }
}

impl fmt::Display for BootstrapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BootstrapperType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sfx" => Ok(Self::Sfx),
            "sfxv" => Ok(Self::Sfxv),
            other => Err(format!("invalid bootstrapper type `{other}` (expected sfx or sfxv)")),
        }
    }
}

/// How the bundler's standard streams are wired.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdioMode {
    /// Pipe and capture stdout/stderr.
    #[default]
    Pipe,
    /// Share the caller's streams. Nothing is captured.
    Inherit,
    /// Discard all streams. Nothing is captured.
    Ignore,
}

impl FromStr for StdioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pipe" => Ok(Self::Pipe),
            "inherit" => Ok(Self::Inherit),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!("invalid stdio mode `{other}`")),
        }
    }
}

/// Options for a raw bundler run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Working directory of the bundler process.
    ///
    /// Default: the caller's working directory
    pub cwd: Option<PathBuf>,

    /// Stream handling.
    ///
    /// Default: [`StdioMode::Pipe`]
    pub stdio: StdioMode,
}

/// Options for [`Bundler::bundle`](crate::bundler::Bundler::bundle).
///
/// Every field is optional; the defaults produce a silent x64 bootstrapper
/// whose id is derived from the destination file name.
///
/// # Examples
///
/// ```
/// use sfx_bundler::bundler::{Arch, BundleOptions};
///
/// let options = BundleOptions {
///     arch: Arch::I386,
///     args: vec!["--port".into(), "8080".into()],
///     verbose: true,
///     ..Default::default()
/// };
/// assert!(options.id.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Unique id of the resulting executable.
    ///
    /// Default: destination file name without `.exe`
    pub id: Option<String>,

    /// Bootstrapper architecture.
    pub arch: Arch,

    /// Bootstrapper flavour.
    pub bootstrapper: BootstrapperType,

    /// Program to run inside the extracted directory.
    ///
    /// Default: detected by the bootstrapper
    pub run: Option<String>,

    /// Absolute extraction directory.
    ///
    /// Default: `<tmp>/<id>`, decided by the bootstrapper
    pub dest: Option<String>,

    /// Arguments passed to the extracted program.
    pub args: Vec<String>,

    /// Program version, used by the bootstrapper to detect updates.
    pub version: Option<String>,

    /// Compression level.
    pub compress: Option<u32>,

    /// Ask the bundler for verbose output.
    pub verbose: bool,

    /// Awaited after the stub is copied, before the bundler runs.
    pub pre_bundle: Option<Hook>,

    /// Awaited after the bundler succeeded.
    pub post_bundle: Option<Hook>,

    /// Options for the bundler process itself.
    pub run_options: RunOptions,
}
