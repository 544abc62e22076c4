//! # arriva-export
//!
//! Renders the Arriva Soft landing page to static files.
//!
//! ## Usage
//!
//! ```bash
//! # Defaults: ./site.toml if present, output to ./out
//! arriva-export
//!
//! # Explicit config and output directory
//! arriva-export --config deploy/site.toml --out dist
//! ```
//!
//! Writes `index.html`, `robots.txt` and `sitemap.xml`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use arriva_site::SiteConfig;
use arriva_site::config::CONFIG_FILE;
use arriva_site::export::write_export;

#[derive(Parser, Debug)]
#[command(name = "arriva-export")]
#[command(about = "Render the Arriva Soft landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output directory (created if missing)
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Config file (default: site.toml in the working directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            SiteConfig::load_from_path(path)
                .with_context(|| format!("loading config {}", path.display()))
        }
        None => SiteConfig::load_from_path(&PathBuf::from(CONFIG_FILE))
            .with_context(|| format!("loading {CONFIG_FILE}")),
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // stdout stays clean; progress goes to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("arriva-export v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_ref())?;
    let written = write_export(&args.out, &config)
        .with_context(|| format!("exporting to {}", args.out.display()))?;

    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[arriva-export] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
