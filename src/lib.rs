//! # splash-inject
//!
//! Build-time splash screen injection for HTML entry points. A logo asset and
//! a handful of CSS/markup fragments are read from disk, configuration-driven
//! values (background colors, loader variant, minimum display duration) are
//! substituted into them, and the result is spliced into the target document.
//!
//! # Architecture: Compose, Then Splice
//!
//! Every injection pass runs the same three steps, each a pure function of
//! its inputs:
//!
//! ```text
//! 1. Load     assets/  →  FragmentSet     (disk → raw CSS/markup text)
//! 2. Compose  fragments + config  →  ComposedOutput (style block + overlay)
//! 3. Inject   document + output  →  document'       (string splice)
//! ```
//!
//! Fragments are re-read on every pass, deliberately: during development the
//! logo or loader styles may be edited between builds, and at this scale a
//! cache buys nothing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `splash.toml` loading, defaults, validation, loader variant mapping |
//! | [`fragments`] | Reads CSS/markup fragments from the asset root, logo from the public dir |
//! | [`compose`] | Builds the style block and overlay markup from fragments + config |
//! | [`inject`] | The two injection strategies: document splice and token substitution |
//! | [`plugin`] | `SplashScreen` — ties the lifecycle together for host embedding |
//! | [`output`] | CLI output formatting — reports of what each command did |
//!
//! # Design Decisions
//!
//! ## String Splicing Over HTML Parsing
//!
//! The injector inserts before the *first* `</head>` and `</body>` by literal
//! substring replacement, and skips an insertion whose tag is absent. This is
//! deliberate: a full markup parser would change observable behavior on
//! malformed or multi-tag documents that downstream consumers already depend
//! on, and the problem does not need one.
//!
//! ## Maud For The Generated Wrappers
//!
//! The overlay container and style block are built with
//! [Maud](https://maud.lambda.xyz/): malformed wrapper HTML is a compile
//! error, and the boundary between generated structure and trusted raw
//! fragments (`PreEscaped`) is explicit in the template.
//!
//! ## Two Strategies, One Composer
//!
//! Client-rendered entries get the composed output spliced into the document
//! directly. Server-render-hook modules (identifier containing
//! `hooks.server`) instead carry the literal tokens `_vite_splash_head_` and
//! `_vite_splash_body_`, which are replaced with line-break-stripped output
//! so the result stays valid inside a single-line string literal. Both
//! strategies share [`compose`]; only the splice differs.

pub mod compose;
pub mod config;
pub mod fragments;
pub mod inject;
pub mod output;
pub mod plugin;

#[cfg(test)]
pub(crate) mod test_helpers;
