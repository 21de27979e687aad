//! Command-line front end for the resource-bundle manifest generator.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use ctk_gresources_gen::{ManifestGenerator, ProjectConfig};

/// Generate the XML resource-bundle manifest for a toolkit source tree.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Source directory to scan for bundled assets.
    source_root: PathBuf,

    /// Write the manifest to this file instead of standard output.
    output: Option<PathBuf>,

    /// Explicit layout configuration file; by default
    /// `gresources.config.json` is looked up next to the source root.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ProjectConfig::from_path(path)
            .ok_or_else(|| anyhow!("failed to load configuration from {}", path.display()))?,
        None => ProjectConfig::discover(&cli.source_root),
    };

    let generator = ManifestGenerator::new(config.into_layout());
    let xml = generator.generate(&cli.source_root)?;

    match &cli.output {
        Some(path) => fs::write(path, &xml)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{xml}"),
    }

    Ok(())
}
