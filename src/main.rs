//! sfxbundler - build self-extracting executables with the sfx toolchain.
//!
//! Thin front end over the `sfx_bundler` library: `run` passes arguments
//! straight to the sfx bundler, `bundle` builds them from flags and
//! `install` downloads the prebuilt binaries.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match sfx_bundler::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
