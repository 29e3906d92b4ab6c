//! template-catalog CLI entrypoint
//! Parses command-line arguments, builds the catalog shell and dispatches.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::sync::Arc;
use template_catalog::{
    catalog::HttpCatalogLoader,
    config::{DEFAULT_API_URL, Settings},
    docs,
    generation::{DisplayContext, UsageCodeGenerator},
    preferences::PreferenceStore,
    shell::{CatalogShell, Tab},
    view,
};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "template-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog endpoint returning the list of templates
    #[arg(long, env = "TEMPLATE_CATALOG_API_URL", global = true)]
    api_url: Option<String>,
    /// Request timeout in seconds; requests wait indefinitely if unset
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Config file (defaults to the per-user config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Preferences file holding the dark-mode flag
    #[arg(long, env = "TEMPLATE_CATALOG_PREFERENCES", global = true)]
    preferences: Option<PathBuf>,
    /// Fetch again this many times if the catalog cannot be loaded
    #[arg(long, default_value_t = 0, global = true)]
    retries: u32,
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List every template as a card
    List,
    /// Print usage code for a template
    Usage {
        /// Template ID
        template_id: String,
        /// Sample layout: narrow or wide
        #[arg(long, conflicts_with = "width")]
        layout: Option<DisplayContext>,
        /// Pick the layout from a viewport width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Print only the code, e.g. for piping into a clipboard tool
        #[arg(long)]
        raw: bool,
    },
    /// Print a template's HTML body
    Preview {
        /// Template ID
        template_id: String,
    },
    /// Print the variables a template uses, one per line
    Variables {
        /// Template ID
        template_id: String,
    },
    /// Show or change the saved dark/light preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print the sendTemplateEmail package documentation
    Readme,
}

#[derive(clap::Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set the theme explicitly
    Set {
        #[arg(value_parser = ["light", "dark"])]
        theme: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let settings = resolve_settings(&cli)?;
    debug!(api_url = %settings.api_url, "Resolved settings");

    let mut shell = build_shell(&settings)?;

    match &cli.command {
        Commands::List => {
            load_catalog(&mut shell, cli.retries).await?;
            let catalog = shell.catalog()?;
            if catalog.is_empty() {
                println!("No templates available.");
            }
            for template in catalog.templates() {
                println!("{}", view::render_card(template));
            }
        }
        Commands::Usage {
            template_id,
            layout,
            width,
            raw,
        } => {
            let display = match (layout, width) {
                (Some(layout), _) => *layout,
                (None, Some(width)) => DisplayContext::from_viewport_width(*width),
                (None, None) => DisplayContext::default(),
            };
            load_catalog(&mut shell, cli.retries).await?;
            shell.select(template_id)?;
            shell.set_tab(Tab::Usage);
            shell.set_display_context(display);

            let code = shell.usage_code().context("Failed to generate usage code")?;
            if *raw {
                println!("{code}");
            } else {
                print!("{}", view::render_usage(template_id, &code));
            }
        }
        Commands::Preview { template_id } => {
            load_catalog(&mut shell, cli.retries).await?;
            shell.select(template_id)?;
            shell.set_tab(Tab::Preview);
            println!("{}", shell.preview_html()?);
        }
        Commands::Variables { template_id } => {
            load_catalog(&mut shell, cli.retries).await?;
            shell.select(template_id)?;
            for variable in shell.selected_variables()? {
                println!("{variable}");
            }
        }
        Commands::Theme { action } => {
            match action {
                None | Some(ThemeAction::Show) => {}
                Some(ThemeAction::Toggle) => {
                    shell.toggle_dark_mode()?;
                }
                Some(ThemeAction::Set { theme }) => {
                    shell.set_dark_mode(theme == "dark")?;
                }
            }
            println!("{}", if shell.dark_mode() { "dark" } else { "light" });
        }
        Commands::Readme => {
            print!("{}", docs::readme());
        }
    }

    Ok(())
}

/// Defaults, then config file, then flags and environment
fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(api_url) = &cli.api_url {
        settings = settings.with_api_url(api_url)?;
    }
    if let Some(timeout) = cli.timeout {
        settings = settings.with_timeout_secs(timeout)?;
    }
    if let Some(preferences) = &cli.preferences {
        settings = settings.with_preferences_path(preferences);
    }

    if settings.api_url.as_str() != DEFAULT_API_URL {
        info!(api_url = %settings.api_url, "Using custom catalog endpoint");
    }
    Ok(settings)
}

fn build_shell(settings: &Settings) -> anyhow::Result<CatalogShell> {
    let loader = HttpCatalogLoader::new(settings.api_url.clone(), settings.timeout())
        .context("Failed to create catalog loader")?;
    let generator = UsageCodeGenerator::new().context("Failed to load usage templates")?;
    let preferences = PreferenceStore::new(&settings.preferences_path);

    Ok(CatalogShell::new(Arc::new(loader), generator, preferences))
}

/// Fetch the catalog, retrying only as many times as the user asked for
async fn load_catalog(shell: &mut CatalogShell, retries: u32) -> anyhow::Result<()> {
    let mut attempt = 0;
    loop {
        match shell.refresh().await {
            Ok(catalog) => {
                info!(count = catalog.len(), "Loaded templates");
                return Ok(());
            }
            Err(e) if e.is_fetch_failure() && attempt < retries => {
                attempt += 1;
                warn!(attempt, retries, error = %e, "Retrying catalog fetch");
            }
            Err(e) => return Err(e.into()),
        }
    }
}
