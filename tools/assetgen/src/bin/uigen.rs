//! uigen - HUD, menu and icon picture generator

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use assetgen::{AssetRoot, AssetWriter, FontSet, UiFonts, ui};

#[derive(Parser)]
#[command(name = "uigen")]
#[command(about = "Generate HUD numbers, menu labels, icons and crosshairs")]
#[command(version)]
struct Cli {
    /// Root directory of the game's asset tree
    root: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let writer = AssetWriter::open(AssetRoot::new(cli.root))?;
    let fonts = FontSet::load(Path::new("."))?;

    let written = ui::generate_all(
        &writer,
        UiFonts {
            console: &fonts.console,
            display: &fonts.display,
        },
    )?;
    tracing::info!(
        "Wrote {} pictures to {:?}",
        written.len(),
        writer.root().pics_dir()
    );

    Ok(())
}
