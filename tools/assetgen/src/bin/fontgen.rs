//! fontgen - console font sheet generator
//!
//! Writes `<root>/pics/conchars.pcx` from the console TrueType font.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use assetgen::font::{CONSOLE_FONT_PATH, TrueTypeFont};
use assetgen::{AssetRoot, AssetWriter, conchars};

#[derive(Parser)]
#[command(name = "fontgen")]
#[command(about = "Generate the console font sheet")]
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
    let font = TrueTypeFont::load(Path::new(CONSOLE_FONT_PATH))?;

    conchars::generate(&writer, &font)?;
    tracing::info!("Done!");

    Ok(())
}
