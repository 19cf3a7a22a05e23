//! Plugin configuration module.
//!
//! Handles loading and validating `splash.toml`. Every option except
//! `logo_src` has a default; `logo_src` is required and validated at
//! construction time, before any build work begins.
//!
//! ## Configuration Options
//!
//! ```toml
//! logo_src = "logo.svg"        # Required. Resolved against the public dir.
//!
//! splash_bg = "#ffffff"        # Splash screen background color
//! loader_bg = "#0072f5"        # Loader accent color
//! loader_type = "line"         # "line" | "dots" | "none"
//! min_duration_ms = 800        # Minimum display duration (omit for 0)
//! assets_root = "assets"       # Directory holding the bundled fragments
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The loader variant shown inside the splash overlay.
///
/// Selects which style/markup fragment pair the fragment loader reads.
/// `None` selects no fragments at all — the overlay shows only the logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderType {
    #[default]
    Line,
    Dots,
    None,
}

impl LoaderType {
    /// Static variant → `(css, html)` fragment path mapping, relative to the
    /// asset root. `None` maps to no fragments (both resolve to empty text).
    pub fn fragment_paths(self) -> Option<(&'static str, &'static str)> {
        match self {
            LoaderType::Line => Some(("loaders/line.css", "loaders/line.html")),
            LoaderType::Dots => Some(("loaders/dots.css", "loaders/dots.html")),
            LoaderType::None => Option::None,
        }
    }

    /// Lowercase name as written in `splash.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            LoaderType::Line => "line",
            LoaderType::Dots => "dots",
            LoaderType::None => "none",
        }
    }
}

/// Splash screen configuration loaded from `splash.toml`.
///
/// `logo_src` is required; everything else defaults. Unknown keys are
/// rejected. Once validated the config is immutable for the plugin's
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplashConfig {
    /// Path to the logo file, resolved against the host's public directory.
    pub logo_src: String,
    /// Splash screen background color (any CSS color value).
    pub splash_bg: String,
    /// Loader accent color (any CSS color value).
    pub loader_bg: String,
    /// Which loader variant to show under the logo.
    pub loader_type: LoaderType,
    /// Minimum display duration in milliseconds, recorded for the
    /// client-side removal script. Absent means 0.
    pub min_duration_ms: Option<u64>,
    /// Directory holding the bundled CSS/markup fragments.
    pub assets_root: String,
}

fn default_splash_bg() -> String {
    "#ffffff".to_string()
}

fn default_loader_bg() -> String {
    "#0072f5".to_string()
}

fn default_assets_root() -> String {
    "assets".to_string()
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            logo_src: String::new(),
            splash_bg: default_splash_bg(),
            loader_bg: default_loader_bg(),
            loader_type: LoaderType::default(),
            min_duration_ms: None,
            assets_root: default_assets_root(),
        }
    }
}

impl SplashConfig {
    /// Validate required fields.
    ///
    /// `logo_src` must be non-empty — there is no sensible default logo, and
    /// failing here halts setup before any document is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logo_src.trim().is_empty() {
            return Err(ConfigError::Validation(
                "the `logo_src` option is required for splash-inject".into(),
            ));
        }
        if self.assets_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_root must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Minimum display duration with the absent-means-zero default applied.
    pub fn effective_min_duration_ms(&self) -> u64 {
        self.min_duration_ms.unwrap_or(0)
    }
}

/// Load and validate a `splash.toml` config file.
///
/// The file must exist — the CLI has no useful behavior without a logo, so a
/// missing config is an error rather than a silent default.
pub fn load_config(path: &Path) -> Result<SplashConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SplashConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `splash.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# splash-inject configuration
# ===========================
# Only `logo_src` is required. Values shown below are the defaults.
# Unknown keys will cause an error.

# Logo file spliced into the overlay verbatim (trusted SVG/HTML).
# Resolved against the public directory at injection time.
logo_src = "logo.svg"

# Splash screen background color (any CSS color value).
splash_bg = "#ffffff"

# Loader accent color (any CSS color value).
loader_bg = "#0072f5"

# Loader variant shown under the logo: "line", "dots", or "none".
loader_type = "line"

# Minimum display duration in milliseconds. The overlay records this value
# together with the render timestamp so the client-side removal script can
# keep the splash up long enough to avoid a flash. Omit for 0.
# min_duration_ms = 800

# Directory holding the bundled CSS/markup fragments
# (styles.css, loaders/line.css, loaders/line.html, ...).
assets_root = "assets"
"##
}
