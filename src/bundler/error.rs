//! Error types for bundling, running and provisioning.
//!
//! The variants follow the failure taxonomy of a bundle invocation:
//! an unsupported host is rejected before any I/O, a stub copy failure is
//! reported before the bundler is spawned, a spawn failure carries the OS
//! error, and a non-zero exit carries the full [`RunError`].

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

use super::process::RunError;

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the bundler library.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// Host architecture has no matching toolchain bucket.
    #[error("SFX is not supported in this environment (architecture: {arch})")]
    UnsupportedEnvironment {
        /// Architecture reported by the host.
        arch: String,
    },

    /// Copying the bootstrapper stub to the destination failed.
    #[error("failed to copy bootstrapper {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        /// Bootstrapper stub path.
        from: PathBuf,
        /// Destination executable path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A path handed to the bundler is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },

    /// The bundler process could not be launched.
    #[error("failed to spawn {}: {source}", .command.display())]
    Spawn {
        /// Resolved bundler path.
        command: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The bundler ran and exited unsuccessfully.
    #[error(transparent)]
    Run(#[from] RunError),

    /// A pre- or post-bundle hook failed.
    #[error(transparent)]
    Hook(anyhow::Error),

    /// Filesystem operation failed.
    #[error("error {context} {}: {error}", .path.display())]
    Fs {
        /// What was being done.
        context: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Release archive could not be read.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON payload could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raw I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Any other failure.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Exit code reported by the bundler, if this error came from a finished run.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Run(err) => err.code,
            _ => None,
        }
    }
}

/// Attach a message to a missing value or a foreign error.
pub trait Context<T> {
    /// Converts into a [`Error::GenericError`] with `msg`.
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Lazily evaluated variant of [`Context::context`].
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, msg: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::GenericError(format!("{}: {e}", f())))
    }
}

/// Adds filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error into [`Error::Fs`] with a description and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
