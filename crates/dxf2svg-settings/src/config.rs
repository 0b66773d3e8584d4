//! Configuration for dxf2svg
//!
//! Configuration is organized into sections:
//! - Page layout (view box, physical size)
//! - Stroke styles for paths and circles
//! - Output number formatting
//! - Import filters
//!
//! Files may be JSON or TOML; the format is chosen by extension. Every
//! section and field is optional in the file and falls back to its default.

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stroke style used when no style is configured.
pub const DEFAULT_STYLE: &str = "fill: none; stroke: black; stroke-width: 0.01";

/// Largest accepted output precision.
pub const MAX_PRECISION: usize = 15;

/// How the SVG view box is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewBoxMode {
    /// Use the configured view box as is.
    #[default]
    Fixed,
    /// Fit the view box to the drawing's bounds plus margin.
    Fit,
}

impl std::fmt::Display for ViewBoxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewBoxMode::Fixed => write!(f, "fixed"),
            ViewBoxMode::Fit => write!(f, "fit"),
        }
    }
}

/// SVG view box in user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ViewBox {
    /// A 19.5 x 11 landscape sheet whose top edge sits at the DXF X axis.
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: -11.0,
            width: 19.5,
            height: 11.0,
        }
    }
}

/// Page layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// View box selection
    pub mode: ViewBoxMode,
    /// Value of the root `width` attribute, empty to omit
    pub width: String,
    /// Value of the root `height` attribute, empty to omit
    pub height: String,
    /// Space added around the drawing in fit mode
    pub margin: f64,
    /// View box used in fixed mode
    pub view_box: ViewBox,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            mode: ViewBoxMode::Fixed,
            width: "19.5in".to_string(),
            height: "11in".to_string(),
            margin: 0.0,
            view_box: ViewBox::default(),
        }
    }
}

/// Inline CSS applied to emitted elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub path: String,
    pub circle: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_STYLE.to_string(),
            circle: DEFAULT_STYLE.to_string(),
        }
    }
}

/// Output formatting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Decimal places for every number written
    pub precision: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// DXF import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Emit CIRCLE entities
    pub include_circles: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            include_circles: true,
        }
    }
}

/// Complete conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageSettings,
    pub style: StyleSettings,
    pub output: OutputSettings,
    pub import: ImportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dxf2svg").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let vb = &self.page.view_box;
        if !(vb.min_x.is_finite() && vb.min_y.is_finite()) {
            return Err(ConfigError::out_of_range(
                "page.view_box",
                format!("{} {}", vb.min_x, vb.min_y),
            ));
        }
        if !(vb.width.is_finite() && vb.width > 0.0) {
            return Err(ConfigError::out_of_range("page.view_box.width", vb.width));
        }
        if !(vb.height.is_finite() && vb.height > 0.0) {
            return Err(ConfigError::out_of_range("page.view_box.height", vb.height));
        }

        if !(self.page.margin.is_finite() && self.page.margin >= 0.0) {
            return Err(ConfigError::out_of_range("page.margin", self.page.margin));
        }

        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::out_of_range(
                "output.precision",
                self.output.precision,
            ));
        }

        Ok(())
    }
}
