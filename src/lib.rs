//! Resolves browser drivers and helper servers to downloadable binaries by
//! walking GitHub-style release registries.

pub mod cli;
pub mod config;
pub mod log;
pub mod release;
