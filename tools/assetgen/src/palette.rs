//! Game palette and the color indices the generators draw with
//!
//! Every picture shares the 256-color table stored in `pics/colormap.pcx`.
//! Generators only ever refer to colors by index, so the table itself is
//! copied verbatim into each output file.

use anyhow::{Context, Result};
use std::path::Path;

use crate::pcx;

/// Palette index 0
pub const BLACK: u8 = 0;
/// Palette index 15
pub const WHITE: u8 = 15;
/// Palette index 56
pub const GOLD: u8 = 56;
/// Palette index 208
pub const GREEN: u8 = 208;
/// Palette index 214
pub const OLIVE: u8 = 214;
/// Palette index 255, treated as see-through by the renderer
pub const TRANSPARENT: u8 = 255;

/// 256-entry RGB color table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [[u8; 3]; 256],
}

impl Palette {
    /// Serialized size (256 RGB triples)
    pub const SIZE: usize = 768;

    pub fn new(colors: [[u8; 3]; 256]) -> Self {
        Self { colors }
    }

    /// Read a palette from packed RGB bytes
    ///
    /// Returns `None` if fewer than 768 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let mut colors = [[0u8; 3]; 256];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            color.copy_from_slice(rgb);
        }
        Some(Self { colors })
    }

    /// Write the palette as packed RGB bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        for (rgb, color) in bytes.chunks_exact_mut(3).zip(self.colors.iter()) {
            rgb.copy_from_slice(color);
        }
        bytes
    }

    #[inline]
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.colors[index as usize]
    }

    /// Load the color table of an existing PCX picture
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read palette: {:?}", path))?;
        let image =
            pcx::decode(&data).with_context(|| format!("Invalid palette image: {:?}", path))?;

        tracing::debug!(
            "Loaded palette from {:?} ({}x{} reference image)",
            path,
            image.width,
            image.height
        );

        Ok(image.palette)
    }
}
