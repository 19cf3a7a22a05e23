use clap::{Parser, Subcommand};
use splash_inject::output::{CheckItem, InjectSummary, TransformSummary};
use splash_inject::plugin::{ResolvedContext, SplashScreen};
use splash_inject::{config, inject, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "splash-inject")]
#[command(about = "Inject a splash screen overlay into HTML at build time")]
#[command(long_about = "\
Inject a splash screen overlay into HTML at build time

Reads a logo and a set of CSS/markup fragments from disk, substitutes the
configured colors and loader variant into them, and splices the result into
the target text. Two strategies:

  inject      full HTML documents — style block spliced before </head>,
              overlay markup before </body>
  transform   server-render-hook modules (id containing \"hooks.server\") —
              the literal tokens _vite_splash_head_ and _vite_splash_body_
              are replaced with line-break-stripped output

Configuration lives in splash.toml; only `logo_src` is required. The logo
resolves against --public-dir, the fragments against the configured
assets_root:

  assets/
  ├── styles.css            # Base overlay styles (/*BG_SPLASH*/ token)
  └── loaders/
      ├── line.css          # Loader styles (/*BG_LOADER*/ token)
      ├── line.html         # Loader markup
      ├── dots.css
      └── dots.html

The injected overlay publishes window.__VPSS__ = { renderedAt, minDurationMs }
for the client-side removal script to consult.

Run 'splash-inject gen-config' to generate a documented splash.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "splash.toml", global = true)]
    config: PathBuf,

    /// Public directory the logo resolves against
    #[arg(long, default_value = "public", global = true)]
    public_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inject the splash screen into an HTML entry document
    Inject {
        /// HTML document to transform
        html: PathBuf,
        /// Write here instead of transforming in place
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Substitute splash placeholders in a server-render-hook module
    Transform {
        /// Source file to transform
        source: PathBuf,
        /// Unit identifier checked for the hooks.server marker
        /// (defaults to the source path)
        #[arg(long)]
        id: Option<String>,
        /// Write here instead of transforming in place
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate config and verify every fragment and the logo resolve
    Check,
    /// Print a stock splash.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Inject { html, output } => {
            let plugin = setup_plugin(&cli)?;
            let text = std::fs::read_to_string(html)?;
            let head_injected = text.contains("</head>");
            let body_injected = text.contains("</body>");
            let result = plugin.transform_index_html(&text)?;
            let target = output.clone().unwrap_or_else(|| html.clone());
            std::fs::write(&target, &result)?;
            output::print_inject(&InjectSummary {
                source: html.clone(),
                target,
                loader: plugin.config().loader_type,
                head_injected,
                body_injected,
                written_bytes: result.len(),
            });
        }
        Command::Transform { source, id, output } => {
            let plugin = setup_plugin(&cli)?;
            let unit_id = id
                .clone()
                .unwrap_or_else(|| source.to_string_lossy().into_owned());
            let text = std::fs::read_to_string(source)?;
            let head_substituted = text.contains(inject::HEAD_TOKEN);
            let body_substituted = text.contains(inject::BODY_TOKEN);
            let target = output.clone().unwrap_or_else(|| source.clone());
            match plugin.transform(&text, &unit_id)? {
                Some(result) => {
                    std::fs::write(&target, &result)?;
                    output::print_transform(&TransformSummary {
                        id: unit_id,
                        target,
                        applied: true,
                        head_substituted,
                        body_substituted,
                        written_bytes: result.len(),
                    });
                }
                None => {
                    output::print_transform(&TransformSummary {
                        id: unit_id,
                        target,
                        applied: false,
                        head_substituted: false,
                        body_substituted: false,
                        written_bytes: 0,
                    });
                }
            }
        }
        Command::Check => {
            let plugin = setup_plugin(&cli)?;
            let items = run_check(&plugin, &cli.public_dir);
            output::print_check(&items);
            if items.iter().any(|i| !i.is_ok()) {
                return Err("check found unresolved resources".into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config, construct the plugin, and resolve the host context from the
/// CLI's public-dir flag — the CLI is its own host.
fn setup_plugin(cli: &Cli) -> Result<SplashScreen, Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.config)?;
    let mut plugin = SplashScreen::new(config)?;
    plugin.context_resolved(ResolvedContext {
        public_dir: cli.public_dir.clone(),
    });
    Ok(plugin)
}

/// Dry-run resolution of everything an injection pass would read:
/// the base stylesheet, the configured variant's fragment pair, the logo.
fn run_check(plugin: &SplashScreen, public_dir: &std::path::Path) -> Vec<CheckItem> {
    let store = plugin.fragment_store();
    let config = plugin.config();

    let mut fragment_paths = vec!["styles.css"];
    if let Some((css, html)) = config.loader_type.fragment_paths() {
        fragment_paths.push(css);
        fragment_paths.push(html);
    }

    let mut items: Vec<CheckItem> = fragment_paths
        .into_iter()
        .map(|rel| CheckItem {
            label: "Fragment",
            path: store.root().join(rel),
            error: read_error(store.read(rel)),
        })
        .collect();

    items.push(CheckItem {
        label: "Logo",
        path: public_dir.join(&config.logo_src),
        error: read_error(splash_inject::fragments::read_logo(
            public_dir,
            &config.logo_src,
        )),
    });

    items
}

/// The underlying IO message — the check line already shows the path.
fn read_error(result: Result<String, splash_inject::fragments::FragmentError>) -> Option<String> {
    result.err().map(|e| match e {
        splash_inject::fragments::FragmentError::Read { source, .. } => source.to_string(),
    })
}
