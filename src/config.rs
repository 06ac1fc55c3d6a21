//! Optional TOML configuration file.
//!
//! Values here sit between the built-in defaults and the command line:
//! a flag given on the command line always wins.
//!
//! ```toml
//! bin_dir = "/opt/sfx-bin"
//!
//! [release]
//! owner = "touchifyapp"
//! repo = "sfx"
//! version = "1.0.0"
//!
//! [bundle]
//! arch = "x64"
//! type = "sfxv"
//! compress = 9
//! verbose = true
//! ```

use crate::bundler::{Arch, BootstrapperType};
use crate::error::{BundlerError, CliError, Result};
use crate::provision::ReleaseSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SfxConfig {
    /// Toolchain root directory.
    pub bin_dir: Option<PathBuf>,

    /// Where binaries are installed from.
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Defaults for `bundle`.
    #[serde(default)]
    pub bundle: BundleDefaults,
}

/// `[release]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    pub api_base: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// Release to pin the installation to.
    pub version: Option<String>,
}

impl ReleaseConfig {
    /// Release source with unset fields taken from the default.
    pub fn source(&self) -> ReleaseSource {
        let default = ReleaseSource::default();
        ReleaseSource {
            api_base: self.api_base.clone().unwrap_or(default.api_base),
            owner: self.owner.clone().unwrap_or(default.owner),
            repo: self.repo.clone().unwrap_or(default.repo),
        }
    }
}

/// `[bundle]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleDefaults {
    pub arch: Option<Arch>,
    #[serde(rename = "type")]
    pub bootstrapper: Option<BootstrapperType>,
    pub run: Option<String>,
    pub dest: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    pub version: Option<String>,
    pub compress: Option<u32>,
    #[serde(default)]
    pub verbose: bool,
}

impl SfxConfig {
    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BundlerError::Cli(CliError::ExecutionFailed {
                command: "read_config".to_string(),
                reason: format!("Failed to read {}: {}", path.display(), e),
            })
        })?;
        Self::parse(&text)
    }

    /// Parses configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
