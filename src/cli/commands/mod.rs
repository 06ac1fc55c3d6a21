//! Command execution functions for the CLI subcommands.

mod bundle;
mod install;
mod run;

pub use bundle::execute_bundle;
pub use install::execute_install;
pub use run::execute_run;
