//! CLI driver for the user service
//!
//! This module configures the container, resolves the service, and prints
//! results. Output formatting lives here, never in the library core.

pub mod commands;
pub mod output;

use std::path::Path;

use crate::{Result, app::AppConfig};

/// Load the configuration file if one was given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_path(path),
        None => Ok(AppConfig::default()),
    }
}
