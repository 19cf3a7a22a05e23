//! Shared test utilities for the splash-inject test suite.
//!
//! Provides miniature fragment fixtures (carrying the same tokens and class
//! names as the shipped assets), in-memory `FragmentSet` builders, and a
//! `setup_project` helper that materializes an asset root and a public
//! directory with a logo in a temp dir.

use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{LoaderType, SplashConfig};
use crate::fragments::FragmentSet;

// =========================================================================
// Fixture fragment text
// =========================================================================

pub const BASE_CSS: &str = "#vpss {\n  position: fixed;\n  inset: 0;\n  background-color: /*BG_SPLASH*/;\n}\n";
pub const LINE_CSS: &str =
    ".vpss-loader-line::after {\n  background-color: /*BG_LOADER*/;\n}\n";
pub const LINE_HTML: &str = "<div class=\"vpss-loader-line\"></div>\n";
pub const DOTS_CSS: &str =
    ".vpss-loader-dots span {\n  background-color: /*BG_LOADER*/;\n}\n";
pub const DOTS_HTML: &str =
    "<div class=\"vpss-loader-dots\"><span></span><span></span><span></span></div>\n";
pub const LOGO_SVG: &str = r#"<svg viewBox="0 0 10 10"><circle cx="5" cy="5" r="4"/></svg>"#;

/// A config that passes validation, pointed at the default asset root.
pub fn test_config() -> SplashConfig {
    SplashConfig {
        logo_src: "logo.svg".to_string(),
        ..Default::default()
    }
}

/// Build a `FragmentSet` in memory, no disk involved.
pub fn stock_fragment_set(loader_type: LoaderType) -> FragmentSet {
    let (loader_css, loader_html) = match loader_type {
        LoaderType::Line => (LINE_CSS, LINE_HTML),
        LoaderType::Dots => (DOTS_CSS, DOTS_HTML),
        LoaderType::None => ("", ""),
    };
    FragmentSet {
        base_css: BASE_CSS.to_string(),
        loader_css: loader_css.to_string(),
        loader_html: loader_html.to_string(),
    }
}

/// Write the stock fixture fragments into `dir` (as an asset root).
pub fn write_stock_fragments(dir: &std::path::Path) {
    std::fs::create_dir_all(dir.join("loaders")).unwrap();
    std::fs::write(dir.join("styles.css"), BASE_CSS).unwrap();
    std::fs::write(dir.join("loaders/line.css"), LINE_CSS).unwrap();
    std::fs::write(dir.join("loaders/line.html"), LINE_HTML).unwrap();
    std::fs::write(dir.join("loaders/dots.css"), DOTS_CSS).unwrap();
    std::fs::write(dir.join("loaders/dots.html"), DOTS_HTML).unwrap();
}

// =========================================================================
// On-disk project fixture
// =========================================================================

/// A temp project: `assets/` with stock fragments, `public/` with a logo.
pub struct Project {
    tmp: TempDir,
}

impl Project {
    /// A valid config pointing at this project's asset root.
    pub fn config(&self) -> SplashConfig {
        SplashConfig {
            logo_src: "logo.svg".to_string(),
            assets_root: self
                .tmp
                .path()
                .join("assets")
                .to_string_lossy()
                .into_owned(),
            ..Default::default()
        }
    }

    pub fn public_dir(&self) -> PathBuf {
        self.tmp.path().join("public")
    }
}

/// Materialize an isolated asset root + public dir in a temp directory.
pub fn setup_project() -> Project {
    let tmp = TempDir::new().unwrap();
    write_stock_fragments(&tmp.path().join("assets"));
    std::fs::create_dir_all(tmp.path().join("public")).unwrap();
    std::fs::write(tmp.path().join("public/logo.svg"), LOGO_SVG).unwrap();
    Project { tmp }
}
