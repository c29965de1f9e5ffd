//! Asset tree layout and PCX output

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::palette::Palette;
use crate::pcx;

/// Subdirectory of the asset root holding every picture
pub const PICS_DIR: &str = "pics";
/// Reference picture whose color table every output reuses
pub const PALETTE_FILE: &str = "colormap.pcx";
pub const PICTURE_EXT: &str = "pcx";

/// Root of the game's asset tree (the single CLI argument)
#[derive(Debug, Clone)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn pics_dir(&self) -> PathBuf {
        self.root.join(PICS_DIR)
    }

    pub fn palette_path(&self) -> PathBuf {
        self.pics_dir().join(PALETTE_FILE)
    }

    /// `<root>/pics/<name>.pcx`
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.pics_dir().join(format!("{}.{}", name, PICTURE_EXT))
    }
}

/// Writes finished canvases into the asset tree using the game palette
pub struct AssetWriter {
    root: AssetRoot,
    palette: Palette,
}

impl AssetWriter {
    /// Load the game palette from `<root>/pics/colormap.pcx`
    pub fn open(root: AssetRoot) -> Result<Self> {
        let palette = Palette::load(&root.palette_path())?;
        Ok(Self { root, palette })
    }

    pub fn with_palette(root: AssetRoot, palette: Palette) -> Self {
        Self { root, palette }
    }

    pub fn root(&self) -> &AssetRoot {
        &self.root
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Encode `canvas` and write it to `<root>/pics/<name>.pcx`
    pub fn save(&self, name: &str, canvas: &Canvas) -> Result<PathBuf> {
        let path = self.root.asset_path(name);
        let bytes = pcx::encode(
            canvas.width(),
            canvas.height(),
            canvas.pixels(),
            &self.palette,
        )
        .with_context(|| format!("Failed to encode {:?}", path))?;

        write_file(&path, &bytes)?;
        tracing::debug!("  ✓ {} ({}x{})", name, canvas.width(), canvas.height());
        Ok(path)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write output: {:?}", path))
}
