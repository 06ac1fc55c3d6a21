//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, and the merge of
//! command line values over configuration file defaults.

use crate::bundler::{Arch, BootstrapperType, BundleOptions, RunOptions, StdioMode};
use crate::config::BundleDefaults;
use crate::provision::ReleasePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Self-extracting executable bundler
#[derive(Parser, Debug)]
#[command(
    name = "sfxbundler",
    version,
    about = "Build self-extracting executables with the sfx toolchain",
    long_about = "Builds self-extracting executables by embedding a project directory \
into a prebuilt sfx bootstrapper.

Usage:
  sfxbundler install
  sfxbundler bundle --exe dist/app.exe --dir build/app --run \"node server.js\"
  sfxbundler run -- -exe dist/app.exe -dir build/app -id app

Exit code 0 = executable written. A failing bundler's exit code is passed through."
)]
pub struct Args {
    /// Toolchain directory holding the sfx binaries
    ///
    /// Default: `sfx-bin` next to this executable.
    #[arg(long, global = true, env = "SFX_BIN_DIR", value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the sfx bundler with raw arguments and inherited output
    Run(RunArgs),
    /// Bundle a directory into a self-extracting executable
    Bundle(BundleArgs),
    /// Download the sfx binaries from GitHub releases
    Install(InstallArgs),
}

/// Arguments of `run`.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Working directory for the bundler
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Arguments passed to the bundler unchanged
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub args: Vec<String>,
}

impl RunArgs {
    /// Run options for a pass-through invocation.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            cwd: self.cwd.clone(),
            stdio: StdioMode::Inherit,
        }
    }
}

/// Arguments of `bundle`.
#[derive(clap::Args, Debug)]
pub struct BundleArgs {
    /// Destination executable
    #[arg(long = "exe", value_name = "PATH")]
    pub exe: PathBuf,

    /// Directory to embed
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: PathBuf,

    /// Unique id of the executable (default: destination name without .exe)
    #[arg(long)]
    pub id: Option<String>,

    /// Bootstrapper architecture: i386, x64
    #[arg(long)]
    pub arch: Option<Arch>,

    /// Bootstrapper type: sfx, sfxv (verbose extraction)
    #[arg(long = "type", value_name = "TYPE")]
    pub bootstrapper: Option<BootstrapperType>,

    /// Program to run in the extracted directory (default: auto-detect)
    #[arg(long)]
    pub run: Option<String>,

    /// Absolute extraction directory (default: <tmp>/<id>)
    #[arg(long)]
    pub dest: Option<String>,

    /// Argument passed to the extracted program (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Program version used to check for updates
    #[arg(long = "app-version", value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Compression level
    #[arg(long, value_name = "LEVEL")]
    pub compress: Option<u32>,

    /// Verbose bundler output
    #[arg(short, long)]
    pub verbose: bool,

    /// Working directory for the bundler
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Bundler stream handling: pipe, inherit, ignore
    #[arg(long, default_value = "pipe")]
    pub stdio: StdioMode,
}

impl BundleArgs {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.exe.as_os_str().is_empty() {
            return Err("Destination cannot be empty".to_string());
        }
        if !self.dir.is_dir() {
            return Err(format!(
                "Source directory does not exist: {}",
                self.dir.display()
            ));
        }
        Ok(())
    }

    /// Merges these arguments over configuration defaults.
    pub fn to_options(&self, defaults: &BundleDefaults) -> BundleOptions {
        BundleOptions {
            id: self.id.clone(),
            arch: self.arch.or(defaults.arch).unwrap_or_default(),
            bootstrapper: self
                .bootstrapper
                .or(defaults.bootstrapper)
                .unwrap_or_default(),
            run: self.run.clone().or_else(|| defaults.run.clone()),
            dest: self.dest.clone().or_else(|| defaults.dest.clone()),
            args: if self.args.is_empty() {
                defaults.args.clone()
            } else {
                self.args.clone()
            },
            version: self
                .app_version
                .clone()
                .or_else(|| defaults.version.clone()),
            compress: self.compress.or(defaults.compress),
            verbose: self.verbose || defaults.verbose,
            pre_bundle: None,
            post_bundle: None,
            run_options: RunOptions {
                cwd: self.cwd.clone(),
                stdio: self.stdio,
            },
        }
    }
}

/// Arguments of `install`.
#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Install the release tagged with this version
    #[arg(long, value_name = "VERSION", conflicts_with = "latest")]
    pub pin: Option<String>,

    /// Install the newest release even if the configuration pins one
    #[arg(long)]
    pub latest: bool,

    /// GitHub token used for API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl InstallArgs {
    /// Release policy: `--pin`, then `--latest`, then the configured version.
    pub fn policy(&self, configured: Option<&str>) -> ReleasePolicy {
        match (&self.pin, self.latest, configured) {
            (Some(version), _, _) => ReleasePolicy::Pinned(version.clone()),
            (None, true, _) => ReleasePolicy::Latest,
            (None, false, Some(version)) => ReleasePolicy::Pinned(version.to_string()),
            (None, false, None) => ReleasePolicy::Latest,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
