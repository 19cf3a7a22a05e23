//! Injection strategies.
//!
//! Two mutually exclusive ways of splicing a [`ComposedOutput`] into target
//! text, selected by which lifecycle hook fires:
//!
//! - **Document splice** ([`inject_html`]) — for client-rendered HTML
//!   entries: style block before the first `</head>`, overlay before the
//!   first `</body>`.
//! - **Token substitution** ([`inject_server_source`]) — for server-render
//!   hook modules (identifier containing [`SERVER_HOOK_MARKER`]): the
//!   literal placeholder tokens are replaced with line-break-stripped
//!   output, since the substitution site is a single-line embedded string
//!   literal, not a markup document.
//!
//! Both are pure string functions. A missing closing tag or placeholder
//! token is a silent no-op on that insertion, matching the lenient
//! convention of the host build tools this runs under.

use crate::compose::ComposedOutput;

/// Identifier substring marking a server-side render-hook module.
pub const SERVER_HOOK_MARKER: &str = "hooks.server";

/// Placeholder token replaced by the style block in server-hook source.
pub const HEAD_TOKEN: &str = "_vite_splash_head_";
/// Placeholder token replaced by the overlay markup in server-hook source.
pub const BODY_TOKEN: &str = "_vite_splash_body_";

/// Strategy A: splice the composed output into a full HTML document.
///
/// Inserts immediately before the first `</head>` and first `</body>`.
/// Either insertion is silently skipped when its tag is absent; everything
/// outside the insertion points is byte-identical to the input.
pub fn inject_html(html: &str, output: &ComposedOutput) -> String {
    let html = html.replacen("</head>", &format!("{}</head>", output.style_block), 1);
    html.replacen("</body>", &format!("{}</body>", output.overlay_markup), 1)
}

/// Whether a source unit identifier names a server-side render-hook module.
///
/// Units that don't match are never transformed — callers should not even
/// compose output for them.
pub fn is_server_hook(id: &str) -> bool {
    id.contains(SERVER_HOOK_MARKER)
}

/// Strategy B: substitute the placeholder tokens in server-hook source.
///
/// Replaces the first [`HEAD_TOKEN`] with the style block and the first
/// [`BODY_TOKEN`] with the overlay markup, both stripped of line breaks so
/// they stay valid inside a single-line string literal. Absent tokens leave
/// the text unchanged.
pub fn inject_server_source(src: &str, output: &ComposedOutput) -> String {
    let src = src.replacen(HEAD_TOKEN, &strip_line_breaks(&output.style_block), 1);
    src.replacen(BODY_TOKEN, &strip_line_breaks(&output.overlay_markup), 1)
}

/// Remove all CR/LF characters.
fn strip_line_breaks(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}
