//! Application-level error types.
//!
//! Library failures arrive as [`crate::bundler::Error`]; this module adds the
//! CLI and configuration layers on top and maps everything to an exit code.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the `sfxbundler` binary
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// A bundler that exited with a code passes it through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Bundler(err) => err.exit_code().filter(|code| *code != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_run_errors_exit_with_one() {
        let err = BundlerError::from(CliError::InvalidArguments {
            reason: "x".into(),
        });
        assert_eq!(err.exit_code(), 1);

        let err = BundlerError::from(crate::bundler::Error::UnsupportedEnvironment {
            arch: "riscv64".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }
}
