//! Console character sheet (`pics/conchars.pcx`)
//!
//! A 128×128 sheet of 8×8 cells. The first nine rows hold the normal glyph
//! set, the next seven the highlighted set used for selected menu entries.
//! Each glyph is stamped twice, black one pixel lower and then white, which
//! gives the console text its drop shadow.

use anyhow::Result;
use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, TRANSPARENT, WHITE};

pub const SHEET_NAME: &str = "conchars";
pub const SHEET_SIZE: u32 = 128;
/// Cell pitch in both directions
pub const CELL_SIZE: i32 = 8;
pub const FONT_SIZE: f32 = 8.0;

pub const CONCHARS: [&str; 9] = [
    "•╔═╗║ ║╚═╝ ■ ►••",
    "[]┌─┐│ │└─┘▬•├─┤",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "'abcdefghijklmno",
    "pqrstuvwxyz{:}\"◄",
    "                ",
];

pub const CONCHARS_SELECTED: [&str; 7] = [
    "[]012345678─■►••",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "'abcdefghijklmno",
    "pqrstuvwxyz{:}\"◄",
];

/// Top pixel row of every sheet row, base set first, selected set after it
pub fn row_tops() -> impl Iterator<Item = (i32, &'static str)> {
    CONCHARS
        .iter()
        .chain(CONCHARS_SELECTED.iter())
        .enumerate()
        .map(|(row, &chars)| (row as i32 * CELL_SIZE, chars))
}

/// Render the full sheet
pub fn build_sheet(font: &dyn Typeface) -> Canvas {
    let mut sheet = Canvas::new(SHEET_SIZE, SHEET_SIZE, TRANSPARENT);
    draw_rows(&mut sheet, font, row_tops());
    sheet
}

/// Stamp each row's characters into consecutive cells starting at column 0
fn draw_rows<'a>(
    sheet: &mut Canvas,
    font: &dyn Typeface,
    rows: impl IntoIterator<Item = (i32, &'a str)>,
) {
    let mut buf = [0u8; 4];
    for (top, chars) in rows {
        let mut column = 0;
        for ch in chars.chars() {
            let glyph = ch.encode_utf8(&mut buf);
            font.draw_text(sheet, (column, top + 1), glyph, FONT_SIZE, BLACK);
            font.draw_text(sheet, (column, top), glyph, FONT_SIZE, WHITE);
            column += CELL_SIZE;
        }
    }
}

/// Build and save `pics/conchars.pcx`
pub fn generate(writer: &AssetWriter, font: &dyn Typeface) -> Result<PathBuf> {
    let sheet = build_sheet(font);
    let path = writer.save(SHEET_NAME, &sheet)?;
    tracing::info!(
        "Console sheet: {} base rows, {} selected rows -> {:?}",
        CONCHARS.len(),
        CONCHARS_SELECTED.len(),
        path
    );
    Ok(path)
}
