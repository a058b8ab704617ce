use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};

use conf_site::config::Config;
use conf_site::constants::DEFAULT_CONFIG_PATH;
use conf_site::i18n::{Locale, Translations};
use conf_site::logging;
use conf_site::site::{SiteBuilder, SiteData};

#[derive(Parser)]
#[command(name = "conf_site")]
#[command(about = "Renders the conference session pages")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the site configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Locale of the rendered pages (en, fr); overrides the config file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every session page into the output directory
    Build {
        /// Output directory; overrides the config file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a single session page to stdout
    Render {
        /// Session key
        session: String,
    },
    /// Report sessions that reference unknown slots or speakers
    Check,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config)
        .and_then(|config| config.with_env_overrides())
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(locale) = cli.locale {
        config.site.locale = locale;
    }

    let data = SiteData::load(&config.data).context("Failed to load site data")?;
    let translations = Translations::load(config.site.locale, config.site.translations.as_ref())
        .context("Failed to load translations")?;

    match cli.command {
        Commands::Build { out } => {
            let out_dir = out.unwrap_or_else(|| config.output.dir.clone());
            info!(locale = %config.site.locale, "Building session pages into {}", out_dir.display());

            let builder = SiteBuilder::new(&data, &config.site, translations);
            let report = builder.build(&out_dir).map_err(|e| {
                error!("Site build failed: {}", e);
                e
            })?;

            println!("📄 Pages written: {}", report.pages_written);
            println!("🚫 Cancelled sessions: {}", report.cancelled);
            println!("🎨 Stylesheet: {}", report.stylesheet.display());
            println!("📁 Output: {}", report.output_dir.display());
        }
        Commands::Render { session } => {
            let Some(found) = data.find_session(&session) else {
                bail!("Unknown session: {}", session);
            };
            let builder = SiteBuilder::new(&data, &config.site, translations);
            let html = builder.render(found)?;
            println!("{}", html);
        }
        Commands::Check => {
            let problems = data.check();
            if problems.is_empty() {
                println!("✅ All {} sessions reference known slots and speakers", data.sessions.len());
            } else {
                for problem in &problems {
                    warn!("{}", problem);
                    println!("   - {}", problem);
                }
                bail!("{} reference problem(s) found", problems.len());
            }
        }
    }

    Ok(())
}
