//! Builder for constructing [`BundleOptions`].

use super::{Arch, BootstrapperType, BundleOptions, Hook, HookContext, StdioMode};
use std::{future::Future, path::PathBuf};

/// Fluent builder for [`BundleOptions`].
///
/// # Examples
///
/// ```
/// use sfx_bundler::bundler::{Arch, BootstrapperType, BundleOptionsBuilder};
///
/// let options = BundleOptionsBuilder::new()
///     .id("my-app")
///     .arch(Arch::I386)
///     .bootstrapper(BootstrapperType::Sfxv)
///     .run("node server.js")
///     .args(["--port", "8080"])
///     .compress(9)
///     .pre_bundle(|ctx| async move {
///         println!("stub copied to {}", ctx.destination.display());
///         anyhow::Ok(())
///     })
///     .build();
///
/// assert_eq!(options.id.as_deref(), Some("my-app"));
/// assert!(options.pre_bundle.is_some());
/// ```
#[derive(Debug, Default)]
pub struct BundleOptionsBuilder {
    options: BundleOptions,
}

impl BundleOptionsBuilder {
    /// Creates a builder holding the default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the executable id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.options.id = Some(id.into());
        self
    }

    /// Sets the bootstrapper architecture.
    ///
    /// Default: [`Arch::X64`]
    pub fn arch(mut self, arch: Arch) -> Self {
        self.options.arch = arch;
        self
    }

    /// Sets the bootstrapper flavour.
    ///
    /// Default: [`BootstrapperType::Sfx`]
    pub fn bootstrapper(mut self, ty: BootstrapperType) -> Self {
        self.options.bootstrapper = ty;
        self
    }

    /// Sets the program to run after extraction.
    pub fn run(mut self, run: impl Into<String>) -> Self {
        self.options.run = Some(run.into());
        self
    }

    /// Sets the extraction directory.
    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.options.dest = Some(dest.into());
        self
    }

    /// Sets the arguments passed to the extracted program.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the program version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.options.version = Some(version.into());
        self
    }

    /// Sets the compression level.
    pub fn compress(mut self, level: u32) -> Self {
        self.options.compress = Some(level);
        self
    }

    /// Enables verbose bundler output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options.verbose = verbose;
        self
    }

    /// Sets the hook awaited before the bundler runs.
    pub fn pre_bundle<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(HookContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.options.pre_bundle = Some(Hook::new(f));
        self
    }

    /// Sets the hook awaited after the bundler succeeded.
    pub fn post_bundle<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(HookContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.options.post_bundle = Some(Hook::new(f));
        self
    }

    /// Sets the bundler's working directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.options.run_options.cwd = Some(cwd.into());
        self
    }

    /// Sets how the bundler's streams are handled.
    ///
    /// Default: [`StdioMode::Pipe`]
    pub fn stdio(mut self, stdio: StdioMode) -> Self {
        self.options.run_options.stdio = stdio;
        self
    }

    /// Returns the assembled options.
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
