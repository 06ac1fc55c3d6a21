//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that turns a project
//! directory into a self-extracting executable by driving the external sfx
//! bundler.

use super::arguments::bundle_args;
use crate::bundler::{
    error::{Error, Result},
    process::{self, RunResult},
    settings::{BundleOptions, HookContext, RunOptions},
    toolchain::Toolchain,
    utils::fs,
};
use std::path::Path;

/// Main bundler orchestrator.
///
/// Holds a resolved [`Toolchain`]; every operation reuses its bundler path.
///
/// # Examples
///
/// ```no_run
/// use sfx_bundler::bundler::{Bundler, BundleOptionsBuilder, Toolchain};
///
/// # async fn example() -> sfx_bundler::bundler::Result<()> {
/// let toolchain = Toolchain::detect(Toolchain::default_root()?)?;
/// let bundler = Bundler::new(toolchain);
///
/// let options = BundleOptionsBuilder::new()
///     .run("node server.js")
///     .verbose(true)
///     .build();
///
/// let result = bundler.bundle("dist/app.exe", "build/app", &options).await?;
/// println!("{}", result.stdout);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Bundler {
    toolchain: Toolchain,
}

impl Bundler {
    /// Creates a bundler over a resolved toolchain.
    pub fn new(toolchain: Toolchain) -> Self {
        Self { toolchain }
    }

    /// Creates a bundler for the running host.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedEnvironment`] on hosts without a
    /// toolchain bucket, before touching the filesystem.
    pub fn detect(root: impl Into<std::path::PathBuf>) -> Result<Self> {
        Toolchain::detect(root).map(Self::new)
    }

    /// Returns the toolchain this bundler drives.
    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Bundles `source_dir` into the self-extracting executable `destination`.
    ///
    /// # Process
    ///
    /// 1. Creates the destination's parent directory
    /// 2. Copies the bootstrapper stub selected by `options` to `destination`
    /// 3. Awaits the pre-bundle hook
    /// 4. Runs the bundler
    /// 5. Awaits the post-bundle hook
    ///
    /// Each step starts only after the previous one succeeded.
    ///
    /// # Errors
    ///
    /// - [`Error::NonUtf8Path`] if either path is not UTF-8; nothing is written
    /// - [`Error::Copy`] if the stub cannot be copied; the bundler is not run
    /// - [`Error::Spawn`] / [`Error::Run`] from the bundler process
    /// - [`Error::Hook`] with the hook's own error
    pub async fn bundle(
        &self,
        destination: impl AsRef<Path>,
        source_dir: impl AsRef<Path>,
        options: &BundleOptions,
    ) -> Result<RunResult> {
        let destination = destination.as_ref();
        let source_dir = source_dir.as_ref();
        let args = bundle_args(destination, source_dir, options)?;

        log::info!(
            "Bundling {} into {}",
            source_dir.display(),
            destination.display()
        );
        log::debug!("Bundler arguments: {:?}", args);

        fs::create_parent_dir(destination).await?;

        let stub = self
            .toolchain
            .bootstrapper_path(options.bootstrapper, options.arch);
        let copied = fs::stream_copy(&stub, destination).await?;
        log::debug!(
            "Copied {} ({} bytes) to {}",
            stub.display(),
            copied,
            destination.display()
        );

        let context = HookContext {
            destination: destination.to_path_buf(),
            source_dir: source_dir.to_path_buf(),
            args: args.clone(),
        };

        if let Some(hook) = &options.pre_bundle {
            log::debug!("Running pre-bundle hook");
            hook.call(context.clone()).await.map_err(Error::Hook)?;
        }

        let result = self.run(&args, &options.run_options).await?;

        if let Some(hook) = &options.post_bundle {
            log::debug!("Running post-bundle hook");
            hook.call(context).await.map_err(Error::Hook)?;
        }

        log::info!("✓ Created {}", destination.display());
        Ok(result)
    }

    /// Runs the bundler with raw arguments.
    ///
    /// # Errors
    ///
    /// - [`Error::Spawn`] if the bundler cannot be launched
    /// - [`Error::Run`] if it exits with a non-zero status
    pub async fn run(&self, args: &[String], options: &RunOptions) -> Result<RunResult> {
        process::run(self.toolchain.bundler_path(), args, options).await
    }
}
