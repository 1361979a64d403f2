//! # clea
//!
//! Static build tool for the Cléa landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Render ./dist/index.html from the built-in content
//! clea build
//!
//! # Use external content and a different output directory
//! clea build --catalog content.toml --out public_html
//!
//! # Validate content without building
//! clea check --catalog content.toml
//! ```

mod args;
mod config;
mod export;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clea_site::Catalog;
use tracing::{debug, info};

use args::{BuildArgs, CatalogArgs, Cli, Command, DumpArgs};
use config::SiteConfig;

fn init_logging(log_level: &str) {
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

/// Built-in content, or the validated catalog at `path`.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            let catalog = Catalog::from_toml_str(&source)
                .with_context(|| format!("invalid catalog {}", path.display()))?;
            info!("Loaded catalog from {}", path.display());
            Ok(catalog)
        }
        None => {
            debug!("Using built-in catalog");
            Ok(Catalog::builtin().clone())
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = SiteConfig::resolve(args.config.as_deref())?;
    debug!(?config, "Resolved configuration");

    let catalog_path = args.catalog.catalog.or(config.catalog);
    let catalog = load_catalog(catalog_path.as_deref())?;
    let out_dir = args.out.unwrap_or(config.output.dir);
    let public_dir = args.public.unwrap_or(config.output.public_dir);

    let summary = export::export_site(&catalog, &config.meta, &out_dir, &public_dir)?;
    println!(
        "Built {} ({} bytes, {} assets)",
        summary.index.display(),
        summary.html_bytes,
        summary.assets_copied
    );
    Ok(())
}

fn check(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    if args.catalog.is_none() {
        // The built-in content is assembled without construction-time checks.
        catalog.validate()?;
    }
    print_summary(&catalog);
    println!("Catalog OK");
    Ok(())
}

fn dump(args: DumpArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    if args.json {
        let json = serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?;
        println!("{json}");
    } else {
        println!("hero: {}", catalog.hero().title);
        for feature in catalog.features() {
            println!("feature {} [{}]: {}", feature.id, feature.icon.as_str(), feature.title);
        }
        for metric in catalog.metrics() {
            println!("metric {}: {}", metric.label, metric.value);
        }
        for testimonial in catalog.testimonials() {
            println!("testimonial {}", testimonial.name);
        }
        for shot in catalog.screenshots() {
            println!("screenshot {}", shot.as_str());
        }
    }
    Ok(())
}

fn print_summary(catalog: &Catalog) {
    println!("features:     {}", catalog.features().len());
    println!("metrics:      {}", catalog.metrics().len());
    println!("testimonials: {}", catalog.testimonials().len());
    println!("screenshots:  {}", catalog.screenshots().len());
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Build(args) => build(args),
        Command::Check(args) => check(args),
        Command::Catalog(args) => dump(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[clea] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
