//! `run`: raw pass-through to the sfx bundler.

use crate::bundler::Bundler;
use crate::cli::args::RunArgs;
use crate::error::Result;

/// Runs the bundler with the user's arguments and inherited streams.
pub async fn execute_run(bundler: &Bundler, args: &RunArgs) -> Result<i32> {
    log::debug!("Passing {:?} to the sfx bundler", args.args);

    let result = bundler.run(&args.args, &args.run_options()).await?;
    Ok(result.code)
}
