//! Subcommand handlers.

pub mod config;
pub mod info;
pub mod play;
pub mod report;
