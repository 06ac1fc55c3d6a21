//! Release archive extraction.

use crate::bundler::{Error, ErrorExt, Result};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// Unpacks a zip archive held in memory into `dest`.
///
/// Returns the extracted file paths. Entries whose names would land outside
/// `dest` are rejected. Unix permission bits stored in the archive are
/// restored.
pub async fn extract_zip(archive: Vec<u8>, dest: &Path) -> Result<Vec<PathBuf>> {
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || extract_blocking(archive, &dest))
        .await
        .map_err(|e| Error::GenericError(format!("archive extraction task panicked: {e}")))?
}

fn extract_blocking(archive: Vec<u8>, dest: &Path) -> Result<Vec<PathBuf>> {
    let mut reader = zip::ZipArchive::new(Cursor::new(archive))?;
    let mut extracted = Vec::new();

    std::fs::create_dir_all(dest).fs_context("creating extraction directory", dest)?;

    for i in 0..reader.len() {
        let mut entry = reader.by_index(i)?;
        let relative = entry.enclosed_name().ok_or_else(|| {
            Error::GenericError(format!("archive entry escapes target directory: {}", entry.name()))
        })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).fs_context("creating directory", &out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
        }
        let mut file =
            std::fs::File::create(&out_path).fs_context("creating extracted file", &out_path)?;
        std::io::copy(&mut entry, &mut file).fs_context("writing extracted file", &out_path)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&out_path, std::fs::Permissions::from_mode(mode & 0o7777))
                    .fs_context("setting permissions on", &out_path)?;
            }
        }

        log::debug!("Extracted {}", out_path.display());
        extracted.push(out_path);
    }

    Ok(extracted)
}
