//! Main menu options and section banners
//!
//! Labels are drawn onto an oversized strip and cropped afterwards. The crop
//! keeps the rows the ink actually covers, but its width is the font's own
//! measurement of the label rather than the inked extent.

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::canvas::{BoundingBox, Canvas};
use crate::font::Typeface;
use crate::output::AssetWriter;
use crate::palette::{BLACK, GOLD, TRANSPARENT, WHITE};

pub const STRIP_WIDTH: u32 = 512;
pub const STRIP_HEIGHT: u32 = 32;
pub const LABEL_FONT_SIZE: f32 = 20.0;
/// Suffix of the highlighted menu variant
pub const SELECTED_SUFFIX: &str = "_sel";

pub const MENU_OPTIONS: [(&str, &str); 5] = [
    ("m_main_game", "Game"),
    ("m_main_multiplayer", "Multiplayer"),
    ("m_main_options", "Options"),
    ("m_main_video", "Video"),
    ("m_main_quit", "Quit"),
];

pub const BANNERS: [(&str, &str); 8] = [
    ("pause", "Paused"),
    ("loading", "Loading"),
    ("m_banner_multiplayer", "Multiplayer"),
    ("m_banner_options", "Options"),
    ("m_banner_game", "Game"),
    ("m_banner_join_server", "Join Server"),
    ("m_banner_addressbook", "Addresses"),
    ("m_banner_video", "Video"),
];

/// Draw `label` with a black shadow one pixel below, then crop it
///
/// Fails if nothing was inked, since there is no extent to crop to.
pub fn render_label(font: &dyn Typeface, key: &str, label: &str, color: u8) -> Result<Canvas> {
    let mut strip = Canvas::new(STRIP_WIDTH, STRIP_HEIGHT, TRANSPARENT);
    font.draw_text(&mut strip, (0, 1), label, LABEL_FONT_SIZE, BLACK);
    font.draw_text(&mut strip, (0, 0), label, LABEL_FONT_SIZE, color);

    let (text_width, _) = font.text_size(label, LABEL_FONT_SIZE);
    let Some(ink) = strip.bounding_box() else {
        bail!("Label {:?} for {} rendered no pixels", label, key);
    };
    if text_width == 0 {
        bail!("Label {:?} for {} has zero width", label, key);
    }

    Ok(strip.crop(BoundingBox {
        left: 0,
        top: ink.top,
        right: text_width,
        bottom: ink.bottom,
    }))
}

/// Every menu option in white plus a gold `_sel` variant
pub fn generate_menu(writer: &AssetWriter, font: &dyn Typeface) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(MENU_OPTIONS.len() * 2);
    for (key, label) in MENU_OPTIONS {
        let normal = render_label(font, key, label, WHITE)?;
        written.push(writer.save(key, &normal)?);

        let selected = render_label(font, key, label, GOLD)?;
        written.push(writer.save(&format!("{}{}", key, SELECTED_SUFFIX), &selected)?);
    }
    Ok(written)
}

/// Section headings, white only
pub fn generate_banners(writer: &AssetWriter, font: &dyn Typeface) -> Result<Vec<PathBuf>> {
    BANNERS
        .iter()
        .map(|&(key, label)| writer.save(key, &render_label(font, key, label, WHITE)?))
        .collect()
}
