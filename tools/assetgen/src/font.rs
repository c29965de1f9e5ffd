//! TrueType text stamping onto indexed canvases
//!
//! Palette pictures have no alpha, so glyph coverage is thresholded to hard
//! pixels. Text is positioned by the top-left of its line box: the baseline
//! sits one (rounded) ascent below the requested `y`.

use anyhow::{Context, Result, anyhow};
use std::path::Path;

use crate::canvas::Canvas;

/// Monospace face used for the console sheet and crosshairs
pub const CONSOLE_FONT_PATH: &str = "fonts/int10h/Px437_AmstradPC1512.ttf";
/// Proportional display face used for all other UI text
pub const DISPLAY_FONT_PATH: &str = "fonts/kenney/Kenney Future.ttf";

/// Minimum coverage for a pixel to be inked
const COVERAGE_THRESHOLD: u8 = 128;

/// Anything that can measure and stamp text in a single palette index
pub trait Typeface {
    /// Draw `text` with its line box's top-left corner at `origin`
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, px: f32, color: u8);

    /// Rendered size of `text` as (width, height)
    ///
    /// Width is the pen advance (or the last inked column, if further right).
    /// Height runs from the ascender line to the lowest inked row.
    fn text_size(&self, text: &str, px: f32) -> (u32, u32);
}

/// A glyph bitmap placed relative to the line box origin
struct PlacedGlyph {
    x: i32,
    top: i32,
    width: usize,
    coverage: Vec<u8>,
}

impl PlacedGlyph {
    /// (column, row) of every pixel at or above the coverage threshold
    fn inked(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.coverage
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c >= COVERAGE_THRESHOLD)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }
}

/// TrueType font file parsed with fontdue
pub struct TrueTypeFont {
    font: fontdue::Font,
}

impl TrueTypeFont {
    /// Load a font file, failing if it is missing or not a valid TrueType font
    pub fn load(path: &Path) -> Result<Self> {
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read font: {:?}", path))?;
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(|e| anyhow!("Failed to parse font {:?}: {}", path, e))?;

        tracing::debug!("Loaded font {:?} ({} glyphs)", path, font.glyph_count());
        Ok(Self { font })
    }

    fn ascent(&self, px: f32) -> i32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px)
            .round() as i32
    }

    /// Lay out `text` on one line, returning the glyphs and the final pen position
    fn layout(&self, text: &str, px: f32) -> (Vec<PlacedGlyph>, f32) {
        let ascent = self.ascent(px);
        let mut glyphs = Vec::new();
        let mut pen = 0.0f32;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            let (metrics, coverage) = self.font.rasterize(ch, px);
            if metrics.width > 0 && metrics.height > 0 {
                glyphs.push(PlacedGlyph {
                    x: pen.round() as i32 + metrics.xmin,
                    top: ascent - metrics.ymin - metrics.height as i32,
                    width: metrics.width,
                    coverage,
                });
            }

            pen += metrics.advance_width;
            if let Some(&next) = chars.peek() {
                pen += self.font.horizontal_kern(ch, next, px).unwrap_or(0.0);
            }
        }

        (glyphs, pen)
    }
}

impl Typeface for TrueTypeFont {
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, px: f32, color: u8) {
        let (glyphs, _) = self.layout(text, px);
        for glyph in &glyphs {
            for (col, row) in glyph.inked() {
                canvas.put(origin.0 + glyph.x + col, origin.1 + glyph.top + row, color);
            }
        }
    }

    fn text_size(&self, text: &str, px: f32) -> (u32, u32) {
        let (glyphs, pen) = self.layout(text, px);
        let mut width = pen.round().max(0.0) as i32;
        let mut height = self.ascent(px).max(0);

        for glyph in &glyphs {
            for (col, row) in glyph.inked() {
                width = width.max(glyph.x + col + 1);
                height = height.max(glyph.top + row + 1);
            }
        }

        (width.max(0) as u32, height as u32)
    }
}

/// Both faces the generators need, loaded once per run
pub struct FontSet {
    pub console: TrueTypeFont,
    pub display: TrueTypeFont,
}

impl FontSet {
    /// Load the console and display fonts from paths relative to `base`
    pub fn load(base: &Path) -> Result<Self> {
        Ok(Self {
            console: TrueTypeFont::load(&base.join(CONSOLE_FONT_PATH))?,
            display: TrueTypeFont::load(&base.join(DISPLAY_FONT_PATH))?,
        })
    }
}
