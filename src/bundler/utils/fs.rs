//! File system utilities for bundling and provisioning.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::{
    fs,
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

/// Creates the parent directory of `path` and all of its ancestors.
pub async fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    Ok(())
}

/// Streams the contents of `from` into `to`, replacing `to` if it exists.
///
/// Returns the number of bytes copied. Any failure, including a missing
/// source file, is reported as [`Error::Copy`].
pub async fn stream_copy(from: &Path, to: &Path) -> Result<u64> {
    let copy_err = |source| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let mut reader = File::open(from).await.map_err(copy_err)?;
    let mut writer = BufWriter::new(File::create(to).await.map_err(copy_err)?);

    let copied = tokio::io::copy(&mut reader, &mut writer)
        .await
        .map_err(copy_err)?;
    writer.flush().await.map_err(copy_err)?;

    Ok(copied)
}

/// Sets mode `755` on `path`. No-op on non-unix hosts.
pub async fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("setting permissions on", path)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
