//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "clea")]
#[command(about = "Build the Cléa landing page as static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render index.html and copy static assets into the output directory
    Build(BuildArgs),
    /// Validate a catalog and print item counts
    Check(CatalogArgs),
    /// Print the catalog
    Catalog(DumpArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Config file (default: ./clea.toml when present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output directory (overrides the config file)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Static asset directory copied next to index.html (overrides the config file)
    #[arg(long)]
    pub public: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// TOML catalog replacing the built-in content
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Print pretty JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}
