//! Location of the prebuilt sfx binaries.
//!
//! The toolchain root (`sfx-bin/`) holds one directory per architecture:
//!
//! ```text
//! sfx-bin/
//! ├── x64/    bundler, sfx.exe, sfxv.exe
//! ├── i386/   bundler, sfx.exe, sfxv.exe
//! └── arm/    bundler            (ARM hosts only)
//! ```
//!
//! A [`Toolchain`] is resolved once for the host and then passed around by
//! reference; the bundler path it holds never changes.

use super::{
    error::{Context, Result},
    settings::{Arch, BootstrapperType, HostArch, HostOs},
};
use std::path::{Path, PathBuf};

/// Name of the toolchain directory placed next to the executable.
pub const TOOLCHAIN_DIR_NAME: &str = "sfx-bin";

/// Resolved toolchain layout for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    root: PathBuf,
    host_arch: HostArch,
    bundler: PathBuf,
}

impl Toolchain {
    /// Resolves the toolchain under `root` for the running host.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedEnvironment`](super::Error::UnsupportedEnvironment)
    /// if the host architecture has no toolchain bucket. Nothing is read from
    /// disk.
    pub fn detect(root: impl Into<PathBuf>) -> Result<Self> {
        let host_arch = HostArch::current()?;
        Ok(Self::for_host(root, host_arch, HostOs::current()))
    }

    /// Resolves the toolchain under `root` for an explicit host.
    pub fn for_host(root: impl Into<PathBuf>, host_arch: HostArch, host_os: HostOs) -> Self {
        let root = root.into();
        let bundler = root
            .join(host_arch.as_str())
            .join(host_os.bundler_file_name());

        log::debug!("Resolved sfx bundler: {}", bundler.display());

        Self {
            root,
            host_arch,
            bundler,
        }
    }

    /// Default root: `sfx-bin` next to the running executable.
    pub fn default_root() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;
        Ok(dir.join(TOOLCHAIN_DIR_NAME))
    }

    /// Toolchain root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Host architecture bucket.
    pub fn host_arch(&self) -> HostArch {
        self.host_arch
    }

    /// Path of the bundler executable for this host.
    pub fn bundler_path(&self) -> &Path {
        &self.bundler
    }

    /// Path of the bootstrapper stub for `ty` and `arch`.
    pub fn bootstrapper_path(&self, ty: BootstrapperType, arch: Arch) -> PathBuf {
        self.root
            .join(arch.as_str())
            .join(format!("{}.exe", ty.as_str()))
    }
}
