//! UI picture passes
//!
//! Each pass renders a fixed table of assets and writes them under `pics/`.
//! Passes share nothing but the palette (through [`AssetWriter`]) and the two
//! fonts, so they can run in any order.

pub mod cursor;
pub mod hud;
pub mod icons;
pub mod labels;
pub mod plaque;

use anyhow::Result;
use std::path::PathBuf;

use crate::font::Typeface;
use crate::output::AssetWriter;

/// Faces used by the UI passes
#[derive(Clone, Copy)]
pub struct UiFonts<'a> {
    /// Monospace console face (crosshairs)
    pub console: &'a dyn Typeface,
    /// Proportional display face (everything else)
    pub display: &'a dyn Typeface,
}

/// Number of files a full run writes
pub const UI_ASSET_COUNT: usize = hud::HUD_GROUPS.len() * 10
    + hud::HUD_GROUPS.len()
    + cursor::FRAME_COUNT as usize
    + labels::MENU_OPTIONS.len() * 2
    + 1
    + labels::BANNERS.len()
    + icons::ICONS.len()
    + icons::CROSSHAIRS.len();

/// Run every UI pass in order, stopping at the first failure
pub fn generate_all(writer: &AssetWriter, fonts: UiFonts<'_>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(UI_ASSET_COUNT);
    let display = fonts.display;

    record(&mut written, "HUD digits", hud::generate_digits(writer, display)?);
    record(&mut written, "HUD minus", hud::generate_minus(writer, display)?);
    record(&mut written, "Cursor", cursor::generate(writer, display)?);
    record(&mut written, "Menu options", labels::generate_menu(writer, display)?);
    record(&mut written, "Title plaque", vec![plaque::generate(writer, display)?]);
    record(&mut written, "Banners", labels::generate_banners(writer, display)?);
    record(&mut written, "Icons", icons::generate_icons(writer, display)?);
    record(&mut written, "Crosshairs", icons::generate_crosshairs(writer, fonts.console)?);

    Ok(written)
}

fn record(written: &mut Vec<PathBuf>, pass: &str, files: Vec<PathBuf>) {
    tracing::info!("{}: {} files", pass, files.len());
    written.extend(files);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::AssetRoot;
    use crate::palette::Palette;
    use crate::testing::{BlockFont, RecordingFont};

    #[test]
    fn test_asset_count() {
        // 20 digits, 2 minus, 16 cursor frames, 10 menu, 1 plaque, 8 banners,
        // 21 icons, 3 crosshairs
        assert_eq!(UI_ASSET_COUNT, 81);
    }

    #[test]
    fn test_generate_all_writes_every_asset_once() {
        let dir = tempfile::tempdir().unwrap();
        let writer =
            AssetWriter::with_palette(AssetRoot::new(dir.path()), Palette::new([[9; 3]; 256]));
        let fonts = UiFonts {
            console: &BlockFont,
            display: &BlockFont,
        };

        let mut written = generate_all(&writer, fonts).unwrap();
        assert_eq!(written.len(), UI_ASSET_COUNT);

        written.sort();
        written.dedup();
        assert_eq!(written.len(), UI_ASSET_COUNT, "two passes targeted the same file");
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_crosshairs_use_console_face() {
        let dir = tempfile::tempdir().unwrap();
        let writer =
            AssetWriter::with_palette(AssetRoot::new(dir.path()), Palette::new([[0; 3]; 256]));
        let console = RecordingFont::default();
        let display = RecordingFont::default();

        generate_all(
            &writer,
            UiFonts {
                console: &console,
                display: &display,
            },
        )
        .unwrap();

        let console_calls = console.take();
        assert_eq!(console_calls.len(), icons::CROSSHAIRS.len());
        assert!(console_calls.iter().all(|c| c.px == icons::CROSSHAIR_FONT_SIZE));
        assert!(display.take().iter().all(|c| c.px != icons::CROSSHAIR_FONT_SIZE));
    }
}
