//! Vertical title plaque beside the main menu (`m_main_plaque`)

use anyhow::Result;
use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, GREEN, TRANSPARENT};

pub const PLAQUE_NAME: &str = "m_main_plaque";
pub const TITLE: &str = "qengine";
pub const PLAQUE_WIDTH: u32 = 38;
pub const PLAQUE_HEIGHT: u32 = 166;
pub const PLAQUE_FONT_SIZE: f32 = 26.0;
/// Offset used when a letter is too narrow for the width rule
const NARROW_OFFSET: i32 = 9;
const WIDTH_BIAS: i32 = 19;

/// Horizontal offset for a letter of the given rendered width
pub fn letter_offset(width: u32) -> i32 {
    match (width as i32 - WIDTH_BIAS).max(0) {
        0 => NARROW_OFFSET,
        x => x,
    }
}

/// Stack the title letters top to bottom, returning the canvas and the
/// total vertical advance
pub fn build_plaque(font: &dyn Typeface) -> (Canvas, u32) {
    let mut canvas = Canvas::new(PLAQUE_WIDTH, PLAQUE_HEIGHT, TRANSPARENT);
    let mut y = 0u32;
    let mut buf = [0u8; 4];

    for ch in TITLE.chars() {
        let letter = ch.encode_utf8(&mut buf);
        let (width, height) = font.text_size(letter, PLAQUE_FONT_SIZE);
        let x = letter_offset(width);

        font.draw_text(&mut canvas, (x, y as i32 + 1), letter, PLAQUE_FONT_SIZE, BLACK);
        font.draw_text(&mut canvas, (x, y as i32), letter, PLAQUE_FONT_SIZE, GREEN);
        y += height;
    }

    (canvas, y)
}

pub fn generate(writer: &AssetWriter, font: &dyn Typeface) -> Result<PathBuf> {
    let (canvas, used) = build_plaque(font);
    if used > PLAQUE_HEIGHT {
        tracing::warn!(
            "Title {:?} needs {}px but the plaque is {}px tall; bottom letters are clipped",
            TITLE,
            used,
            PLAQUE_HEIGHT
        );
    }
    writer.save(PLAQUE_NAME, &canvas)
}
