//! `bundle`: structured bundling.

use crate::bundler::Bundler;
use crate::cli::args::BundleArgs;
use crate::config::BundleDefaults;
use crate::error::{BundlerError, CliError, Result};

/// Validates the arguments, bundles and echoes the bundler's captured output.
pub async fn execute_bundle(
    bundler: &Bundler,
    args: &BundleArgs,
    defaults: &BundleDefaults,
) -> Result<i32> {
    args.validate()
        .map_err(|reason| BundlerError::Cli(CliError::InvalidArguments { reason }))?;

    let options = args.to_options(defaults);
    let result = bundler.bundle(&args.exe, &args.dir, &options).await?;

    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }

    Ok(result.code)
}
