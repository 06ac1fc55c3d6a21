//! Pre- and post-bundle extension points.

use std::{fmt, future::Future, path::PathBuf, pin::Pin, sync::Arc};

/// Future returned by a hook.
pub type HookFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// What a hook gets to see about the bundle in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    /// Destination executable, already holding the bootstrapper stub.
    pub destination: PathBuf,
    /// Directory being embedded.
    pub source_dir: PathBuf,
    /// Arguments the bundler is (or was) invoked with.
    pub args: Vec<String>,
}

/// Optional async callback awaited before or after the bundler runs.
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn(HookContext) -> HookFuture + Send + Sync>);

impl Hook {
    /// Wraps an async closure.
    ///
    /// ```
    /// use sfx_bundler::bundler::Hook;
    ///
    /// let hook = Hook::new(|ctx| async move {
    ///     println!("bundling into {}", ctx.destination.display());
    ///     anyhow::Ok(())
    /// });
    /// # let _ = hook;
    /// ```
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(HookContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self(Arc::new(move |ctx: HookContext| -> HookFuture { Box::pin(f(ctx)) }))
    }

    /// Invokes the hook and waits for it.
    pub async fn call(&self, ctx: HookContext) -> anyhow::Result<()> {
        (self.0)(ctx).await
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(<fn>)")
    }
}
