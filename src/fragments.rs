//! Fragment loading.
//!
//! Fragments are the static text files bundled with the plugin — the base
//! stylesheet plus the per-variant loader CSS/markup pairs — and the
//! user-supplied logo, resolved against the host's public directory.
//!
//! Every injection pass reads fresh from disk. There is no cache: during
//! development any of these files may be edited between builds, and each
//! read is a handful of kilobytes at most. A read failure is fatal and
//! propagates to the caller, aborting the current injection.

use crate::config::LoaderType;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("failed to read fragment {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The raw fragment text an injection pass composes from.
///
/// For `loader_type = "none"` both loader fields are empty strings and no
/// loader file is read at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSet {
    /// `styles.css` — always loaded, carries the `/*BG_SPLASH*/` token.
    pub base_css: String,
    /// Loader stylesheet, carries the `/*BG_LOADER*/` token. May be empty.
    pub loader_css: String,
    /// Loader markup placed after the logo in the overlay. May be empty.
    pub loader_html: String,
}

/// Reads fragments from a fixed asset root directory.
#[derive(Debug, Clone)]
pub struct FragmentStore {
    root: PathBuf,
}

impl FragmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a single fragment by path relative to the asset root.
    pub fn read(&self, relative: &str) -> Result<String, FragmentError> {
        let path = self.root.join(relative);
        fs::read_to_string(&path).map_err(|source| FragmentError::Read { path, source })
    }

    /// Load the full fragment set for a loader variant.
    ///
    /// The base stylesheet is always read; the loader pair only for variants
    /// that have one.
    pub fn load(&self, loader_type: LoaderType) -> Result<FragmentSet, FragmentError> {
        let base_css = self.read("styles.css")?;
        let (loader_css, loader_html) = match loader_type.fragment_paths() {
            Some((css_path, html_path)) => (self.read(css_path)?, self.read(html_path)?),
            None => (String::new(), String::new()),
        };
        Ok(FragmentSet {
            base_css,
            loader_css,
            loader_html,
        })
    }
}

/// Read the logo fragment from the host's public directory.
///
/// Resolved at injection time, not cached from an earlier lifecycle stage —
/// the host context must already be available when this runs.
pub fn read_logo(public_dir: &Path, logo_src: &str) -> Result<String, FragmentError> {
    let path = public_dir.join(logo_src);
    fs::read_to_string(&path).map_err(|source| FragmentError::Read { path, source })
}
