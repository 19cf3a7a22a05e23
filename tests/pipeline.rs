//! End-to-end injection tests against the shipped assets.
//!
//! Unit tests use miniature fixture fragments; these tests run the full
//! lifecycle (construct → context resolved → transform) against the real
//! `assets/` directory that ships with the crate, so a fragment missing its
//! background token or a renamed loader class fails here.

use splash_inject::config::{LoaderType, SplashConfig};
use splash_inject::plugin::{ResolvedContext, SplashScreen};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LOGO: &str = r#"<svg viewBox="0 0 24 24"><rect width="24" height="24" rx="4"/></svg>"#;

fn shipped_assets() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Temp public dir holding a logo, and a plugin wired against it.
fn setup(loader_type: LoaderType) -> (TempDir, SplashScreen) {
    let public = TempDir::new().unwrap();
    std::fs::write(public.path().join("logo.svg"), LOGO).unwrap();

    let config = SplashConfig {
        logo_src: "logo.svg".to_string(),
        loader_type,
        assets_root: shipped_assets().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let mut plugin = SplashScreen::new(config).unwrap();
    plugin.context_resolved(ResolvedContext {
        public_dir: public.path().to_path_buf(),
    });
    (public, plugin)
}

const ENTRY_HTML: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>App</title>\n</head>\n<body>\n<div id=\"app\"></div>\n</body>\n</html>\n";

#[test]
fn shipped_assets_carry_the_background_tokens() {
    let styles = std::fs::read_to_string(shipped_assets().join("styles.css")).unwrap();
    assert!(styles.contains("/*BG_SPLASH*/"));
    for loader in ["line", "dots"] {
        let css =
            std::fs::read_to_string(shipped_assets().join(format!("loaders/{loader}.css")))
                .unwrap();
        assert!(css.contains("/*BG_LOADER*/"), "{loader}.css lost its token");
        let html =
            std::fs::read_to_string(shipped_assets().join(format!("loaders/{loader}.html")))
                .unwrap();
        assert!(html.contains(&format!("vpss-loader-{loader}")));
    }
}

#[test]
fn inject_entry_document_with_line_loader() {
    let (_public, plugin) = setup(LoaderType::Line);
    let result = plugin.transform_index_html(ENTRY_HTML).unwrap();

    // Style block sits right before </head>
    let head_close = result.find("</head>").unwrap();
    let style_start = result.find(r#"<style id="vpss-style">"#).unwrap();
    assert!(style_start < head_close);
    assert!(result[..head_close].contains("background-color: #ffffff"));
    assert!(result[..head_close].contains("vpss-line-slide"));
    assert!(result[..head_close].contains("#0072f5"));

    // Overlay sits right before </body>
    let body_close = result.find("</body>").unwrap();
    let overlay_start = result.find(r#"<div id="vpss">"#).unwrap();
    assert!(head_close < overlay_start && overlay_start < body_close);
    assert!(result.contains(LOGO));
    assert!(result.contains("vpss-loader-line"));
    assert!(result.contains("window.__VPSS__"));
    assert!(result.contains(r#""minDurationMs":0"#));

    // No unsubstituted tokens survive
    assert!(!result.contains("/*BG_SPLASH*/"));
    assert!(!result.contains("/*BG_LOADER*/"));
}

#[test]
fn inject_entry_document_with_dots_loader_and_custom_colors() {
    let public = TempDir::new().unwrap();
    std::fs::write(public.path().join("logo.svg"), LOGO).unwrap();

    let config = SplashConfig {
        logo_src: "logo.svg".to_string(),
        splash_bg: "#111827".to_string(),
        loader_bg: "#f59e0b".to_string(),
        loader_type: LoaderType::Dots,
        min_duration_ms: Some(1500),
        assets_root: shipped_assets().to_string_lossy().into_owned(),
    };
    let mut plugin = SplashScreen::new(config).unwrap();
    plugin.context_resolved(ResolvedContext {
        public_dir: public.path().to_path_buf(),
    });

    let result = plugin.transform_index_html(ENTRY_HTML).unwrap();
    assert!(result.contains("background-color: #111827"));
    assert!(result.contains("#f59e0b"));
    assert!(result.contains("vpss-loader-dots"));
    assert!(!result.contains("vpss-loader-line"));
    assert!(result.contains(r#""minDurationMs":1500"#));
}

#[test]
fn inject_entry_document_with_no_loader() {
    let (_public, plugin) = setup(LoaderType::None);
    let result = plugin.transform_index_html(ENTRY_HTML).unwrap();

    assert!(result.contains(r#"<style id="vpss-style">"#));
    assert!(result.contains("background-color: #ffffff"));
    assert!(result.contains(LOGO));
    assert!(!result.contains("vpss-loader"));
}

#[test]
fn inject_document_without_head_still_gets_overlay() {
    let (_public, plugin) = setup(LoaderType::Line);
    let html = "<html><body></body></html>";
    let result = plugin.transform_index_html(html).unwrap();
    assert!(!result.contains("vpss-style"));
    assert!(result.contains(r#"<div id="vpss">"#));
    assert!(result.ends_with("</body></html>"));
}

#[test]
fn inject_leaves_rest_of_document_byte_identical() {
    let (_public, plugin) = setup(LoaderType::Line);
    let result = plugin.transform_index_html(ENTRY_HTML).unwrap();

    // Cut the two injected spans back out; the remainder must equal the input.
    let style_start = result.find(r#"<style id="vpss-style">"#).unwrap();
    let head_close = result.find("</head>").unwrap();
    let overlay_start = result.find(r#"<div id="vpss">"#).unwrap();
    let body_close = result.find("</body>").unwrap();
    let restored = format!(
        "{}{}{}",
        &result[..style_start],
        &result[head_close..overlay_start],
        &result[body_close..]
    );
    assert_eq!(restored, ENTRY_HTML);
}

#[test]
fn transform_server_hook_module() {
    let (_public, plugin) = setup(LoaderType::Line);
    let src = r#"const head = "_vite_splash_head_";
const body = "_vite_splash_body_";
export const handle = () => {};
"#;
    let result = plugin
        .transform(src, "src/hooks.server.ts")
        .unwrap()
        .unwrap();

    assert!(!result.contains("_vite_splash_head_"));
    assert!(!result.contains("_vite_splash_body_"));
    assert!(result.contains("vpss-style"));
    assert!(result.contains("window.__VPSS__"));

    // Substituted spans are newline-free: only the source's own 3 survive.
    assert_eq!(result.matches('\n').count(), 3);

    // Surrounding source is intact.
    assert!(result.contains("export const handle = () => {};"));
}

#[test]
fn transform_skips_other_modules() {
    let (_public, plugin) = setup(LoaderType::Line);
    let src = r#"const head = "_vite_splash_head_";"#;
    assert!(plugin.transform(src, "src/app.ts").unwrap().is_none());
}

#[test]
fn repeated_composition_differs_only_in_timestamp() {
    let (_public, plugin) = setup(LoaderType::Dots);
    let a = plugin.transform_index_html(ENTRY_HTML).unwrap();
    let b = plugin.transform_index_html(ENTRY_HTML).unwrap();

    let strip_ts = |s: &str| -> String {
        let start = s.find(r#""renderedAt":"#).unwrap() + r#""renderedAt":"#.len();
        let end = start
            + s[start..]
                .find(|c: char| !c.is_ascii_digit())
                .unwrap();
        format!("{}{}", &s[..start], &s[end..])
    };
    assert_eq!(strip_ts(&a), strip_ts(&b));
}

#[test]
fn missing_logo_aborts_injection() {
    let public = TempDir::new().unwrap(); // no logo written
    let config = SplashConfig {
        logo_src: "logo.svg".to_string(),
        assets_root: shipped_assets().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let mut plugin = SplashScreen::new(config).unwrap();
    plugin.context_resolved(ResolvedContext {
        public_dir: public.path().to_path_buf(),
    });
    assert!(plugin.transform_index_html(ENTRY_HTML).is_err());
}
