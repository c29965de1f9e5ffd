//! Placeholder inventory icons and crosshairs

use anyhow::Result;
use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, TRANSPARENT, WHITE};

pub const ICON_SIZE: u32 = 24;
pub const ICON_FONT_SIZE: f32 = 12.0;
const ICON_TEXT_ORIGIN: (i32, i32) = (2, 5);

pub const CROSSHAIR_SIZE: u32 = 8;
pub const CROSSHAIR_FONT_SIZE: f32 = 8.0;

/// Item icons: a short code on an opaque white tile
pub const ICONS: [(&str, &str); 21] = [
    ("icon_health", "+"),
    ("icon_bodyarmor", "S1"),
    ("icon_combatarmor", "S2"),
    ("icon_jacketarmor", "S3"),
    ("icon_blaster", "W0"),
    ("icon_shotgun", "W1"),
    ("icon_sshotgun", "W2"),
    ("icon_machinegun", "W3"),
    ("icon_chaingun", "W4"),
    ("icon_grenades", "W5"),
    ("icon_glauncher", "W6"),
    ("icon_rlauncher", "W7"),
    ("icon_hyperblaster", "W8"),
    ("icon_railgun", "W9"),
    ("icon_bullets", "A1"),
    ("icon_shells", "A2"),
    ("icon_cells", "A3"),
    ("icon_rockets", "A4"),
    ("icon_slugs", "A5"),
    ("icon_bluekey", "K1"),
    ("icon_redkey", "K2"),
];

/// Crosshairs use console font glyphs
pub const CROSSHAIRS: [(&str, &str); 3] = [
    ("crosshair_1", "•"),
    ("crosshair_2", "·"),
    ("crosshair_3", "+"),
];

pub fn icon_canvas(font: &dyn Typeface, code: &str) -> Canvas {
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE, WHITE);
    font.draw_text(&mut canvas, ICON_TEXT_ORIGIN, code, ICON_FONT_SIZE, BLACK);
    canvas
}

pub fn crosshair_canvas(font: &dyn Typeface, glyph: &str) -> Canvas {
    let mut canvas = Canvas::new(CROSSHAIR_SIZE, CROSSHAIR_SIZE, TRANSPARENT);
    font.draw_text(&mut canvas, (0, 0), glyph, CROSSHAIR_FONT_SIZE, WHITE);
    canvas
}

pub fn generate_icons(writer: &AssetWriter, display: &dyn Typeface) -> Result<Vec<PathBuf>> {
    ICONS
        .iter()
        .map(|&(key, code)| writer.save(key, &icon_canvas(display, code)))
        .collect()
}

pub fn generate_crosshairs(writer: &AssetWriter, console: &dyn Typeface) -> Result<Vec<PathBuf>> {
    CROSSHAIRS
        .iter()
        .map(|&(key, glyph)| writer.save(key, &crosshair_canvas(console, glyph)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingFont;

    #[test]
    fn test_icon_is_opaque_and_uncropped() {
        let font = RecordingFont::default();
        let canvas = icon_canvas(&font, "W7");

        assert_eq!((canvas.width(), canvas.height()), (24, 24));
        assert_eq!(canvas.background(), WHITE);
        assert!(!canvas.pixels().contains(&TRANSPARENT));
        assert!(canvas.pixels().contains(&BLACK));

        let calls = font.take();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].origin, (2, 5));
        assert_eq!(calls[0].px, ICON_FONT_SIZE);
    }

    #[test]
    fn test_crosshair_canvas() {
        let font = RecordingFont::default();
        let canvas = crosshair_canvas(&font, "+");

        assert_eq!((canvas.width(), canvas.height()), (8, 8));
        assert_eq!(canvas.get(0, 0), TRANSPARENT);
        assert!(canvas.pixels().contains(&WHITE));

        let calls = font.take();
        assert_eq!(calls[0].origin, (0, 0));
        assert_eq!(calls[0].color, WHITE);
        assert_eq!(calls[0].px, CROSSHAIR_FONT_SIZE);
    }

    #[test]
    fn test_icon_keys_are_unique() {
        let mut keys: Vec<&str> = ICONS
            .iter()
            .chain(CROSSHAIRS.iter())
            .map(|(k, _)| *k)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ICONS.len() + CROSSHAIRS.len());
    }
}
