//! The `SplashScreen` plugin — lifecycle wiring for host embedding.
//!
//! A host build tool drives the plugin through three hooks, in order:
//!
//! 1. [`SplashScreen::new`] — construction. Validates the config; an empty
//!    `logo_src` fails here, before any build work begins.
//! 2. [`SplashScreen::context_resolved`] — called exactly once with the
//!    host's resolved context (its public directory). The host guarantees
//!    this happens before any transform.
//! 3. Per processed unit, either [`SplashScreen::transform_index_html`]
//!    (client-rendered HTML entries) or [`SplashScreen::transform`]
//!    (source modules, applied only to server-render hooks).
//!
//! The plugin itself is almost stateless: the validated config and the
//! once-set context are the only fields, and every transform re-reads the
//! fragments and logo from disk. Composition and splicing stay pure
//! functions in [`compose`](crate::compose) and [`inject`](crate::inject) —
//! this module only threads the context through them.

use crate::compose::{self, ComposedOutput};
use crate::config::{ConfigError, SplashConfig};
use crate::fragments::{self, FragmentError, FragmentStore};
use crate::inject;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fragment(#[from] FragmentError),
    #[error("host context was not resolved before a transform ran")]
    ContextNotResolved,
}

/// Host-supplied resolved context. Set exactly once, read-only afterward.
#[derive(Debug, Clone)]
pub struct ResolvedContext {
    /// The host's public directory; the logo resolves against it.
    pub public_dir: PathBuf,
}

/// Build-time splash screen injector.
#[derive(Debug)]
pub struct SplashScreen {
    config: SplashConfig,
    store: FragmentStore,
    context: Option<ResolvedContext>,
}

impl SplashScreen {
    /// Construct the plugin from a validated configuration.
    ///
    /// Fails immediately on invalid config (missing `logo_src`) — a broken
    /// setup should halt before the host starts feeding documents through.
    pub fn new(config: SplashConfig) -> Result<Self, PluginError> {
        config.validate()?;
        let store = FragmentStore::new(&config.assets_root);
        Ok(Self {
            config,
            store,
            context: None,
        })
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    pub fn fragment_store(&self) -> &FragmentStore {
        &self.store
    }

    /// Lifecycle hook: the host's configuration has been resolved.
    pub fn context_resolved(&mut self, context: ResolvedContext) {
        self.context = Some(context);
    }

    /// Strategy A hook: transform a full HTML entry document.
    ///
    /// Returns the document with the style block before `</head>` and the
    /// overlay markup before `</body>`. A fragment or logo read failure is
    /// fatal and propagates to the host.
    pub fn transform_index_html(&self, html: &str) -> Result<String, PluginError> {
        let output = self.compose()?;
        Ok(inject::inject_html(html, &output))
    }

    /// Strategy B hook: transform a source unit.
    ///
    /// Returns `None` for units that are not server-render hooks — the host
    /// leaves those unmodified and no file is read for them. For matching
    /// units the placeholder tokens are substituted; if the tokens are
    /// absent the returned text equals the input.
    pub fn transform(&self, src: &str, id: &str) -> Result<Option<String>, PluginError> {
        if !inject::is_server_hook(id) {
            return Ok(None);
        }
        let output = self.compose()?;
        Ok(Some(inject::inject_server_source(src, &output)))
    }

    /// Load fragments + logo fresh and compose the output pair.
    fn compose(&self) -> Result<ComposedOutput, PluginError> {
        let context = self.context.as_ref().ok_or(PluginError::ContextNotResolved)?;
        let fragments = self.store.load(self.config.loader_type)?;
        let logo_html = fragments::read_logo(&context.public_dir, &self.config.logo_src)?;
        Ok(compose::compose(&fragments, &logo_html, &self.config))
    }
}
