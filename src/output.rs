//! CLI output formatting.
//!
//! Each command has a summary struct, a pure `format_*` function (returns
//! `Vec<String>`) for testability, and a `print_*` wrapper that writes to
//! stdout. Format functions do no I/O.
//!
//! ## Format
//!
//! ```text
//! Inject dist/index.html
//!     Loader: line
//!     Style block → before </head>
//!     Overlay → before </body>
//!     Wrote dist/index.html (10432 bytes)
//!
//! Transform src/hooks.server.ts
//!     _vite_splash_head_ → style block
//!     _vite_splash_body_ → overlay
//!     Wrote src/hooks.server.ts (2048 bytes)
//!
//! Check
//!     Fragment: assets/styles.css
//!     Fragment: assets/loaders/line.css — failed to read ...
//!     Logo: public/logo.svg
//! ```

use crate::config::LoaderType;
use std::path::PathBuf;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Inject
// ============================================================================

/// What the `inject` command did to one HTML document.
#[derive(Debug)]
pub struct InjectSummary {
    pub source: PathBuf,
    pub target: PathBuf,
    pub loader: LoaderType,
    /// Whether the document had a `</head>` to insert before.
    pub head_injected: bool,
    /// Whether the document had a `</body>` to insert before.
    pub body_injected: bool,
    pub written_bytes: usize,
}

pub fn format_inject(summary: &InjectSummary) -> Vec<String> {
    let mut lines = vec![format!("Inject {}", summary.source.display())];
    lines.push(format!("{}Loader: {}", indent(1), summary.loader.as_str()));
    lines.push(format!(
        "{}Style block {}",
        indent(1),
        if summary.head_injected {
            "→ before </head>"
        } else {
            "skipped (no </head> tag)"
        }
    ));
    lines.push(format!(
        "{}Overlay {}",
        indent(1),
        if summary.body_injected {
            "→ before </body>"
        } else {
            "skipped (no </body> tag)"
        }
    ));
    lines.push(format!(
        "{}Wrote {} ({} bytes)",
        indent(1),
        summary.target.display(),
        summary.written_bytes
    ));
    lines
}

pub fn print_inject(summary: &InjectSummary) {
    for line in format_inject(summary) {
        println!("{line}");
    }
}

// ============================================================================
// Transform
// ============================================================================

/// What the `transform` command did to one source unit.
#[derive(Debug)]
pub struct TransformSummary {
    pub id: String,
    pub target: PathBuf,
    /// False when the id lacks the server-hook marker — unit left untouched.
    pub applied: bool,
    pub head_substituted: bool,
    pub body_substituted: bool,
    pub written_bytes: usize,
}

pub fn format_transform(summary: &TransformSummary) -> Vec<String> {
    let mut lines = vec![format!("Transform {}", summary.id)];
    if !summary.applied {
        lines.push(format!(
            "{}Not a server-render hook (id lacks \"hooks.server\") — unchanged",
            indent(1)
        ));
        return lines;
    }
    lines.push(format!(
        "{}_vite_splash_head_ {}",
        indent(1),
        if summary.head_substituted {
            "→ style block"
        } else {
            "not found, skipped"
        }
    ));
    lines.push(format!(
        "{}_vite_splash_body_ {}",
        indent(1),
        if summary.body_substituted {
            "→ overlay"
        } else {
            "not found, skipped"
        }
    ));
    lines.push(format!(
        "{}Wrote {} ({} bytes)",
        indent(1),
        summary.target.display(),
        summary.written_bytes
    ));
    lines
}

pub fn print_transform(summary: &TransformSummary) {
    for line in format_transform(summary) {
        println!("{line}");
    }
}

// ============================================================================
// Check
// ============================================================================

/// One resolved resource in a `check` run.
#[derive(Debug)]
pub struct CheckItem {
    /// Resource kind: "Config", "Fragment", or "Logo".
    pub label: &'static str,
    pub path: PathBuf,
    /// Error message when resolution failed.
    pub error: Option<String>,
}

impl CheckItem {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub fn format_check(items: &[CheckItem]) -> Vec<String> {
    let mut lines = vec!["Check".to_string()];
    for item in items {
        match &item.error {
            None => lines.push(format!(
                "{}{}: {}",
                indent(1),
                item.label,
                item.path.display()
            )),
            Some(err) => lines.push(format!(
                "{}{}: {} — {}",
                indent(1),
                item.label,
                item.path.display(),
                err
            )),
        }
    }
    let failures = items.iter().filter(|i| !i.is_ok()).count();
    if failures == 0 {
        lines.push("Check passed".to_string());
    } else {
        lines.push(format!("Check failed ({failures} unresolved)"));
    }
    lines
}

pub fn print_check(items: &[CheckItem]) {
    for line in format_check(items) {
        println!("{line}");
    }
}
