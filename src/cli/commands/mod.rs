//! CLI subcommands

pub mod demo;
pub mod get;
pub mod list;
