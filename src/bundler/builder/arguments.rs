//! Bundler command line construction.

use crate::bundler::{
    error::{Error, Result},
    settings::BundleOptions,
};
use std::path::Path;

/// Builds the bundler argument vector for one bundle request.
///
/// `-exe` and `-dir` are always present, followed by `-id`. Optional flags
/// appear only when their option is set. The runtime arguments are joined
/// with spaces into the single value of `-args`.
///
/// # Errors
///
/// [`Error::NonUtf8Path`] if either path is not valid UTF-8.
pub fn bundle_args(
    destination: &Path,
    source_dir: &Path,
    options: &BundleOptions,
) -> Result<Vec<String>> {
    let mut args = vec![
        "-exe".to_string(),
        utf8(destination)?,
        "-dir".to_string(),
        utf8(source_dir)?,
    ];

    args.push("-id".to_string());
    args.push(match &options.id {
        Some(id) => id.clone(),
        None => default_id(destination),
    });

    let optional = [
        ("-run", options.run.clone()),
        ("-dest", options.dest.clone()),
        ("-version", options.version.clone()),
        ("-compress", options.compress.map(|level| level.to_string())),
    ];
    for (flag, value) in optional {
        if let Some(value) = value {
            args.push(flag.to_string());
            args.push(value);
        }
    }

    if !options.args.is_empty() {
        args.push("-args".to_string());
        args.push(options.args.join(" "));
    }

    if options.verbose {
        args.push("-v".to_string());
    }

    Ok(args)
}

fn utf8(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::NonUtf8Path {
            path: path.to_path_buf(),
        })
}

/// Destination file name with a trailing `.exe` removed.
pub fn default_id(destination: &Path) -> String {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.strip_suffix(".exe") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}
