//! CPU architecture and platform types.

use crate::bundler::error::{Error, Result};
use std::{fmt, str::FromStr};

/// Architecture of the bootstrapper stub embedded in the output executable.
///
/// Only the two stub flavours shipped by the sfx releases exist.
///
/// # Examples
///
/// ```
/// use sfx_bundler::bundler::Arch;
///
/// let arch: Arch = "i386".parse().unwrap();
/// assert_eq!(arch.as_str(), "i386");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// x86 (32-bit)
    I386,
    /// x86_64 / AMD64 (64-bit)
    #[default]
    X64,
}

impl Arch {
    /// Directory name of this architecture under the toolchain root.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I386 => "i386",
            Self::X64 => "x64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "i386" => Ok(Self::I386),
            "x64" => Ok(Self::X64),
            other => Err(format!("invalid architecture `{other}` (expected i386 or x64)")),
        }
    }
}

/// Toolchain bucket the host bundler executable is taken from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HostArch {
    /// 32-bit x86 host
    I386,
    /// 64-bit x86 host
    X64,
    /// 32-bit ARM host
    Arm,
}

impl HostArch {
    /// Maps a Rust architecture name (`std::env::consts::ARCH`) to a bucket.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedEnvironment`] for any other architecture.
    pub fn from_rust_arch(arch: &str) -> Result<Self> {
        match arch {
            "x86" => Ok(Self::I386),
            "x86_64" => Ok(Self::X64),
            "arm" => Ok(Self::Arm),
            other => Err(Error::UnsupportedEnvironment {
                arch: other.to_string(),
            }),
        }
    }

    /// Bucket of the running host.
    pub fn current() -> Result<Self> {
        Self::from_rust_arch(std::env::consts::ARCH)
    }

    /// Directory name of this bucket under the toolchain root.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I386 => "i386",
            Self::X64 => "x64",
            Self::Arm => "arm",
        }
    }
}

impl fmt::Display for HostArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system family, which decides the bundler executable name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HostOs {
    Windows,
    MacOs,
    Other,
}

impl HostOs {
    /// Family of the running host.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// File name of the bundler executable shipped for this family.
    pub fn bundler_file_name(self) -> &'static str {
        match self {
            Self::Windows => "bundler.exe",
            Self::MacOs => "bundlerosx",
            Self::Other => "bundler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_rust_arches_map_to_buckets() {
        assert_eq!(HostArch::from_rust_arch("x86").unwrap(), HostArch::I386);
        assert_eq!(HostArch::from_rust_arch("x86_64").unwrap(), HostArch::X64);
        assert_eq!(HostArch::from_rust_arch("arm").unwrap(), HostArch::Arm);
    }

    #[test]
    fn other_arches_are_unsupported() {
        for arch in ["aarch64", "riscv64", "powerpc64", "s390x"] {
            let err = HostArch::from_rust_arch(arch).unwrap_err();
            assert!(matches!(err, Error::UnsupportedEnvironment { .. }), "{arch}");
        }
    }

    #[test]
    fn stub_arch_parses_both_flavours() {
        assert_eq!("x64".parse::<Arch>().unwrap(), Arch::X64);
        assert_eq!("i386".parse::<Arch>().unwrap(), Arch::I386);
        assert!("arm".parse::<Arch>().is_err());
        assert_eq!(Arch::default(), Arch::X64);
    }

    #[test]
    fn bundler_names_per_os() {
        assert_eq!(HostOs::Windows.bundler_file_name(), "bundler.exe");
        assert_eq!(HostOs::MacOs.bundler_file_name(), "bundlerosx");
        assert_eq!(HostOs::Other.bundler_file_name(), "bundler");
    }
}
