//! dxf2svg Settings Crate
//!
//! Handles conversion configuration and its persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    Config, ImportSettings, OutputSettings, PageSettings, StyleSettings, ViewBox, ViewBoxMode,
    DEFAULT_STYLE, MAX_PRECISION,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
