//! assetgen library
//!
//! Rasterizes the console font sheet and the HUD/menu pictures for qengine.
//! Both generators write 8-bit PCX files into `<root>/pics/` using the
//! palette of `<root>/pics/colormap.pcx`.

pub mod canvas;
pub mod conchars;
pub mod font;
pub mod output;
pub mod palette;
pub mod pcx;
pub mod ui;

#[cfg(test)]
mod testing;

pub use canvas::{BoundingBox, Canvas};
pub use font::{FontSet, TrueTypeFont, Typeface};
pub use output::{AssetRoot, AssetWriter};
pub use palette::Palette;
pub use ui::UiFonts;
