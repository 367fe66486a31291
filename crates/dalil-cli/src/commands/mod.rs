//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod import;
pub mod templates;
