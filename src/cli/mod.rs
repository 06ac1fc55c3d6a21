//! Command line interface for the sfx bundler.
//!
//! Parses arguments, layers them over the optional configuration file,
//! resolves the toolchain once and dispatches to a subcommand.

mod args;
pub mod commands;

pub use args::{Args, BundleArgs, Command, InstallArgs, RunArgs};

use crate::bundler::{Bundler, Toolchain};
use crate::config::SfxConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    execute(Args::parse_args()).await
}

/// Executes already parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    let config = match &args.config {
        Some(path) => SfxConfig::load(path)?,
        None => SfxConfig::default(),
    };

    let root = resolve_bin_dir(&args, &config)?;
    let toolchain = Toolchain::detect(root)?;
    log::debug!("Using sfx toolchain at {}", toolchain.root().display());

    match &args.command {
        Command::Run(run) => commands::execute_run(&Bundler::new(toolchain), run).await,
        Command::Bundle(bundle) => {
            commands::execute_bundle(&Bundler::new(toolchain), bundle, &config.bundle).await
        }
        Command::Install(install) => {
            commands::execute_install(&toolchain, install, &config.release).await
        }
    }
}

/// Toolchain root: `--bin-dir`/`SFX_BIN_DIR`, then the config file, then the default.
fn resolve_bin_dir(args: &Args, config: &SfxConfig) -> Result<PathBuf> {
    if let Some(dir) = args.bin_dir.clone().or_else(|| config.bin_dir.clone()) {
        return Ok(dir);
    }
    Ok(Toolchain::default_root()?)
}
