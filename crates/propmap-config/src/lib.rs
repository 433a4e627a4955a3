//! # Propmap Config
//!
//! Layered settings for the mapper and its telemetry, loaded from TOML files
//! and `PROPMAP__`-prefixed environment variables.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
