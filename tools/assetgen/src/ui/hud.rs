//! HUD number glyphs (`num_*`, `anum_*`)

use anyhow::Result;
use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, OLIVE, TRANSPARENT, WHITE};

pub const STAMP_WIDTH: u32 = 16;
pub const STAMP_HEIGHT: u32 = 24;
pub const STAMP_FONT_SIZE: f32 = 24.0;
/// Fill origin; the shadow is drawn one pixel right and down of it
const FILL_ORIGIN: (i32, i32) = (0, -4);

/// Health (`num`) and ammo (`anum`) counters with their fill colors
pub const HUD_GROUPS: [(&str, u8); 2] = [("num", WHITE), ("anum", OLIVE)];

/// Render one HUD glyph with a drop shadow
pub fn stamp_canvas(font: &dyn Typeface, text: &str, color: u8, shadow_color: u8) -> Canvas {
    let mut canvas = Canvas::new(STAMP_WIDTH, STAMP_HEIGHT, TRANSPARENT);
    let (x, y) = FILL_ORIGIN;
    font.draw_text(&mut canvas, (x + 1, y + 1), text, STAMP_FONT_SIZE, shadow_color);
    font.draw_text(&mut canvas, (x, y), text, STAMP_FONT_SIZE, color);
    canvas
}

/// Stamp `text` and save it as `<group>_<name>`, where name defaults to the text
pub fn stamp_character(
    writer: &AssetWriter,
    font: &dyn Typeface,
    text: &str,
    group: &str,
    color: u8,
    shadow_color: u8,
    name: Option<&str>,
) -> Result<PathBuf> {
    let name = name.unwrap_or(text);
    let canvas = stamp_canvas(font, text, color, shadow_color);
    writer.save(&format!("{}_{}", group, name), &canvas)
}

/// Digits 0-9 for both counters
pub fn generate_digits(writer: &AssetWriter, font: &dyn Typeface) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (group, color) in HUD_GROUPS {
        for digit in 0..10 {
            let text = digit.to_string();
            written.push(stamp_character(writer, font, &text, group, color, BLACK, None)?);
        }
    }
    Ok(written)
}

/// `num_minus` and `anum_minus`
pub fn generate_minus(writer: &AssetWriter, font: &dyn Typeface) -> Result<Vec<PathBuf>> {
    HUD_GROUPS
        .iter()
        .map(|&(group, color)| {
            stamp_character(writer, font, "-", group, color, BLACK, Some("minus"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::AssetRoot;
    use crate::palette::Palette;
    use crate::testing::RecordingFont;

    fn writer(dir: &std::path::Path) -> AssetWriter {
        AssetWriter::with_palette(AssetRoot::new(dir), Palette::new([[0; 3]; 256]))
    }

    #[test]
    fn test_stamp_shadow_offset() {
        let font = RecordingFont::default();
        stamp_canvas(&font, "7", WHITE, BLACK);
        let calls = font.take();

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].origin, (1, -3));
        assert_eq!(calls[0].color, BLACK);
        assert_eq!(calls[1].origin, (0, -4));
        assert_eq!(calls[1].color, WHITE);
        assert!(calls.iter().all(|c| c.px == STAMP_FONT_SIZE));
    }

    #[test]
    fn test_digit_file_names_and_colors() {
        let dir = tempfile::tempdir().unwrap();
        let font = RecordingFont::default();
        let written = generate_digits(&writer(dir.path()), &font).unwrap();

        assert_eq!(written.len(), 20);
        for digit in 0..10 {
            assert!(dir.path().join(format!("pics/num_{}.pcx", digit)).exists());
            assert!(dir.path().join(format!("pics/anum_{}.pcx", digit)).exists());
        }

        let calls = font.take();
        let fills: Vec<u8> = calls.iter().skip(1).step_by(2).map(|c| c.color).collect();
        let shadows: Vec<u8> = calls.iter().step_by(2).map(|c| c.color).collect();
        assert!(fills[..10].iter().all(|&c| c == WHITE));
        assert!(fills[10..].iter().all(|&c| c == OLIVE));
        assert!(shadows.iter().all(|&c| c == BLACK));
    }

    #[test]
    fn test_minus_uses_override_name() {
        let dir = tempfile::tempdir().unwrap();
        let font = RecordingFont::default();
        let written = generate_minus(&writer(dir.path()), &font).unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("pics/num_minus.pcx"),
                dir.path().join("pics/anum_minus.pcx")
            ]
        );
        assert!(font.take().iter().all(|c| c.text == "-"));
    }

    #[test]
    fn test_stamp_canvas_size() {
        let canvas = stamp_canvas(&RecordingFont::default(), "0", WHITE, BLACK);
        assert_eq!((canvas.width(), canvas.height()), (16, 24));
        assert!(canvas.bounding_box().is_some());
    }
}
