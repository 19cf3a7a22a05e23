//! Template composition.
//!
//! Builds the two strings every injection strategy consumes: the style block
//! (base stylesheet + loader stylesheet, background tokens substituted) and
//! the overlay markup (logo + loader + init script).
//!
//! ## Token Substitution
//!
//! The CSS fragments carry literal comment tokens — `/*BG_SPLASH*/` in
//! `styles.css`, `/*BG_LOADER*/` in the loader stylesheets — that are
//! replaced with the configured colors. Substitution is literal
//! first-occurrence string replacement; a fragment without its token passes
//! through unmodified, which is not an error.
//!
//! ## The `__VPSS__` Record
//!
//! The overlay ends with an inline script setting `window.__VPSS__` to
//! `{ renderedAt, minDurationMs }`. This record is the sole contract exposed
//! to client-side code: an external removal script compares the two values
//! against the current time to decide when hiding the overlay is safe.
//! The values are rendered through `serde_json` so a configured duration can
//! never produce syntactically broken JS.

use crate::config::SplashConfig;
use crate::fragments::FragmentSet;
use maud::{PreEscaped, html};
use std::time::{SystemTime, UNIX_EPOCH};

/// Background token carried by `styles.css`.
pub const BG_SPLASH_TOKEN: &str = "/*BG_SPLASH*/";
/// Background token carried by the loader stylesheets.
pub const BG_LOADER_TOKEN: &str = "/*BG_LOADER*/";

/// The per-document composition result.
///
/// Ephemeral — recomputed on every pass, never persisted. Identical inputs
/// produce identical output except for the `renderedAt` timestamp embedded
/// in the overlay markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOutput {
    /// `<style id="vpss-style">` block for the document head.
    pub style_block: String,
    /// Overlay container + init script for the document body.
    pub overlay_markup: String,
}

/// Compose style block and overlay markup, stamping the current wall clock
/// as the overlay's `renderedAt`.
pub fn compose(fragments: &FragmentSet, logo_html: &str, config: &SplashConfig) -> ComposedOutput {
    compose_at(fragments, logo_html, config, now_ms())
}

/// Compose with an explicit `renderedAt` timestamp.
///
/// Split out from [`compose`] so tests can pin the one input that varies
/// per call.
pub fn compose_at(
    fragments: &FragmentSet,
    logo_html: &str,
    config: &SplashConfig,
    rendered_at_ms: u64,
) -> ComposedOutput {
    ComposedOutput {
        style_block: style_block(fragments, config),
        overlay_markup: overlay_markup(fragments, logo_html, config, rendered_at_ms),
    }
}

/// Build the `<style id="vpss-style">` block: background-substituted base
/// stylesheet followed by the background-substituted loader stylesheet
/// (an empty second segment for `loader_type = "none"`).
pub fn style_block(fragments: &FragmentSet, config: &SplashConfig) -> String {
    let base = fragments
        .base_css
        .replacen(BG_SPLASH_TOKEN, &config.splash_bg, 1);
    let loader = fragments
        .loader_css
        .replacen(BG_LOADER_TOKEN, &config.loader_bg, 1);

    html! {
        style id="vpss-style" {
            (PreEscaped(base))
            "\n"
            (PreEscaped(loader))
        }
    }
    .into_string()
}

/// Build the overlay markup: `#vpss` container wrapping the raw logo (trusted
/// SVG/HTML, spliced verbatim) and the loader markup, followed by the init
/// script that publishes the `__VPSS__` record.
pub fn overlay_markup(
    fragments: &FragmentSet,
    logo_html: &str,
    config: &SplashConfig,
    rendered_at_ms: u64,
) -> String {
    let record = serde_json::json!({
        "renderedAt": rendered_at_ms,
        "minDurationMs": config.effective_min_duration_ms(),
    });
    let script = format!("window.__VPSS__ = {record};");

    html! {
        div id="vpss" {
            div class="vpss-logo" { (PreEscaped(logo_html)) }
            (PreEscaped(&fragments.loader_html))
        }
        script { (PreEscaped(script)) }
    }
    .into_string()
}

/// Current wall clock in milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
