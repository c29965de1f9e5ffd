//! Deterministic fonts for unit tests

use std::cell::RefCell;

use crate::canvas::Canvas;
use crate::font::Typeface;

/// Draws every non-space character as a solid block
///
/// At size `px` a glyph is `px/2` wide and `3px/4` tall, starting `px/4`
/// below the line top, with one pixel of spacing after it.
pub struct BlockFont;

impl BlockFont {
    pub fn glyph_width(px: f32) -> i32 {
        (px / 2.0).round() as i32
    }

    pub fn advance(px: f32) -> i32 {
        Self::glyph_width(px) + 1
    }
}

impl Typeface for BlockFont {
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, px: f32, color: u8) {
        let top = (px / 4.0).round() as i32;
        let height = (px * 0.75).round() as i32;
        let width = Self::glyph_width(px);

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = origin.0 + i as i32 * Self::advance(px);
            for y in 0..height {
                for x in 0..width {
                    canvas.put(left + x, origin.1 + top + y, color);
                }
            }
        }
    }

    fn text_size(&self, text: &str, px: f32) -> (u32, u32) {
        let count = text.chars().count() as i32;
        ((count * Self::advance(px)) as u32, px.round() as u32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub origin: (i32, i32),
    pub text: String,
    pub px: f32,
    pub color: u8,
}

/// BlockFont that also remembers every draw
#[derive(Default)]
pub struct RecordingFont {
    pub calls: RefCell<Vec<DrawCall>>,
}

impl RecordingFont {
    pub fn take(&self) -> Vec<DrawCall> {
        self.calls.take()
    }
}

impl Typeface for RecordingFont {
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, px: f32, color: u8) {
        self.calls.borrow_mut().push(DrawCall {
            origin,
            text: text.to_string(),
            px,
            color,
        });
        BlockFont.draw_text(canvas, origin, text, px, color);
    }

    fn text_size(&self, text: &str, px: f32) -> (u32, u32) {
        BlockFont.text_size(text, px)
    }
}
