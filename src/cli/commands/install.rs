//! `install`: provisioning of the sfx binaries.

use crate::bundler::Toolchain;
use crate::cli::args::InstallArgs;
use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::provision::Provisioner;

/// Downloads the binaries for the host into the toolchain root.
pub async fn execute_install(
    toolchain: &Toolchain,
    args: &InstallArgs,
    release: &ReleaseConfig,
) -> Result<i32> {
    let policy = args.policy(release.version.as_deref());
    let provisioner = Provisioner::new(release.source(), args.token.as_deref())?;

    log::info!(
        "Installing {} of {}/{} into {}",
        policy,
        provisioner.source().owner,
        provisioner.source().repo,
        toolchain.root().display()
    );

    let tag = provisioner.install(toolchain, &policy).await?;
    println!("Installed sfx {} into {}", tag, toolchain.root().display());

    Ok(0)
}
