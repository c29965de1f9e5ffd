//! Shared fixtures for integration tests

use std::path::Path;

use assetgen::{Canvas, Palette, TrueTypeFont, Typeface, pcx};

/// Draws every non-space character as a `px/2` square
///
/// Squares start `px/4` below the line top, so a label's ink and its shadow
/// land on known rows of the decoded files.
pub struct SquareFont;

impl Typeface for SquareFont {
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, px: f32, color: u8) {
        let size = (px / 2.0).round() as i32;
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let left = origin.0 + i as i32 * (size + 1);
            for y in 0..size {
                for x in 0..size {
                    canvas.put(left + x, origin.1 + size / 2 + y, color);
                }
            }
        }
    }

    fn text_size(&self, text: &str, px: f32) -> (u32, u32) {
        let size = (px / 2.0).round() as u32;
        (text.chars().count() as u32 * (size + 1), size + size / 2)
    }
}

/// DejaVu Sans, kept under `tests/fixtures` with its license
pub fn fixture_font() -> TrueTypeFont {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf");
    TrueTypeFont::load(&path).expect("Failed to load fixture font")
}

/// Palette with a distinct color per index
pub fn test_palette() -> Palette {
    let mut colors = [[0u8; 3]; 256];
    for (i, color) in colors.iter_mut().enumerate() {
        *color = [i as u8, (i as u8).wrapping_mul(3), 255 - i as u8];
    }
    Palette::new(colors)
}

/// Create `<root>/pics/colormap.pcx` holding `palette`
pub fn write_colormap(root: &Path, palette: &Palette) {
    let pics = root.join("pics");
    std::fs::create_dir_all(&pics).expect("Failed to create pics dir");
    let bytes = pcx::encode(16, 16, &(0..=255).collect::<Vec<u8>>(), palette)
        .expect("Failed to encode colormap");
    std::fs::write(pics.join("colormap.pcx"), bytes).expect("Failed to write colormap");
}
