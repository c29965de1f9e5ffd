//! Animated menu cursor (`m_cursor0` .. `m_cursor15`)
//!
//! A single large "." that drops one pixel per frame.

use anyhow::Result;
use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, GOLD, TRANSPARENT};

pub const FRAME_COUNT: u32 = 16;
pub const CURSOR_WIDTH: u32 = 22;
pub const CURSOR_HEIGHT: u32 = 29;
pub const CURSOR_FONT_SIZE: f32 = 36.0;
const X_OFFSET: i32 = 10;
const Y_OFFSET: i32 = -24;

pub fn frame_name(frame: u32) -> String {
    format!("m_cursor{}", frame)
}

/// Render frame `frame` of the blink animation
pub fn cursor_frame(font: &dyn Typeface, frame: u32) -> Canvas {
    let mut canvas = Canvas::new(CURSOR_WIDTH, CURSOR_HEIGHT, TRANSPARENT);
    let y = Y_OFFSET + frame as i32;
    font.draw_text(&mut canvas, (X_OFFSET + 1, y), ".", CURSOR_FONT_SIZE, BLACK);
    font.draw_text(&mut canvas, (X_OFFSET, y - 1), ".", CURSOR_FONT_SIZE, GOLD);
    canvas
}

pub fn generate(writer: &AssetWriter, font: &dyn Typeface) -> Result<Vec<PathBuf>> {
    (0..FRAME_COUNT)
        .map(|frame| writer.save(&frame_name(frame), &cursor_frame(font, frame)))
        .collect()
}
