//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator.
//!
//! # Overview
//!
//! For one bundle request the bundler:
//! 1. Builds the sfx command line from [`BundleOptions`](crate::bundler::BundleOptions)
//! 2. Places the bootstrapper stub at the destination
//! 3. Runs the external bundler, awaiting the optional hooks around it
//! 4. Returns the [`RunResult`](crate::bundler::RunResult)
//!
//! # Module Organization
//!
//! - [`arguments`] - Command line construction
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations

pub mod arguments;
mod orchestrator;

pub use arguments::bundle_args;
pub use orchestrator::Bundler;
