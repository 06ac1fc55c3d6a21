//! Installation of the prebuilt sfx binaries.
//!
//! The bundler and bootstrapper stubs are published as per-architecture zip
//! archives (`sfx-x64.zip`, `sfx-i386.zip`, `sfx-arm.zip`) on GitHub
//! releases. The [`Provisioner`] fetches them into the toolchain root:
//!
//! 1. `x64` and `i386` are always installed, `arm` only on ARM hosts
//! 2. The release is chosen once by the [`ReleasePolicy`]
//! 3. Each archive is extracted into `<root>/<target>`
//! 4. The host bundler is made executable

mod extract;
mod release;

pub use extract::extract_zip;
pub use release::{Asset, GITHUB_API, Release, ReleasePolicy, ReleaseSource, asset_name};

use crate::bundler::{
    HostArch, Toolchain,
    error::{Context, ErrorExt, Result},
    utils::{fs, http},
};
use std::path::PathBuf;

/// Downloads and unpacks toolchain archives.
#[derive(Debug, Clone)]
pub struct Provisioner {
    client: reqwest::Client,
    source: ReleaseSource,
}

impl Provisioner {
    /// Creates a provisioner for `source`, authenticating with `token` when given.
    pub fn new(source: ReleaseSource, token: Option<&str>) -> Result<Self> {
        Ok(Self {
            client: http::client(token)?,
            source,
        })
    }

    /// Release source this provisioner reads from.
    pub fn source(&self) -> &ReleaseSource {
        &self.source
    }

    /// Installs every target required by `toolchain`'s host.
    ///
    /// Returns the tag of the installed release.
    pub async fn install(&self, toolchain: &Toolchain, policy: &ReleasePolicy) -> Result<String> {
        let releases = self.releases().await?;
        let release = policy.select(&releases).with_context(|| {
            format!(
                "no {} found in {}/{}",
                policy, self.source.owner, self.source.repo
            )
        })?;

        log::info!("Installing sfx binaries from {}", release.tag_name);

        for target in install_targets(toolchain.host_arch()) {
            self.install_target(toolchain, release, target).await?;
        }

        let bundler = toolchain.bundler_path();
        if !tokio::fs::try_exists(bundler)
            .await
            .fs_context("checking bundler", bundler)?
        {
            crate::bail!(
                "{} does not contain {}",
                release.tag_name,
                bundler.display()
            );
        }
        fs::make_executable(bundler).await?;

        log::info!("✓ sfx bundler ready at {}", bundler.display());
        Ok(release.tag_name.clone())
    }

    /// Lists the source's releases, newest first.
    pub async fn releases(&self) -> Result<Vec<Release>> {
        http::get_json(&self.client, &self.source.releases_url()).await
    }

    async fn install_target(
        &self,
        toolchain: &Toolchain,
        release: &Release,
        target: HostArch,
    ) -> Result<Vec<PathBuf>> {
        let name = asset_name(target);
        let asset = release
            .asset(&name)
            .with_context(|| format!("{} has no asset named {}", release.tag_name, name))?;

        let dest = toolchain.root().join(target.as_str());
        tokio::fs::create_dir_all(&dest)
            .await
            .fs_context("creating target directory", &dest)?;

        let archive = http::download(&self.client, &asset.browser_download_url).await?;
        let files = extract_zip(archive, &dest).await?;

        log::info!("Installed {} ({} files)", name, files.len());
        Ok(files)
    }
}

/// Toolchain buckets installed on a host, in install order.
pub fn install_targets(host: HostArch) -> Vec<HostArch> {
    let mut targets = vec![HostArch::X64, HostArch::I386];
    if host == HostArch::Arm {
        targets.push(HostArch::Arm);
    }
    targets
}
