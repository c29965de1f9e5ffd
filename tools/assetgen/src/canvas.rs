//! Indexed-color drawing surface

/// Pixel-exclusive rectangle (`right` and `bottom` are one past the last pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Palette-index raster for a single asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: u8,
    /// Palette indices (1 byte per pixel, row-major order)
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: u8) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Index the canvas was cleared to
    pub fn background(&self) -> u8 {
        self.background
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get pixel at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set pixel at signed coordinates, ignoring anything off the canvas
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, index: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixels[idx] = index;
    }

    /// Smallest rectangle holding every pixel that differs from the background
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.width == 0 {
            return None;
        }
        let mut bbox: Option<BoundingBox> = None;

        for (y, row) in self.pixels.chunks_exact(self.width as usize).enumerate() {
            let Some(first) = row.iter().position(|&p| p != self.background) else {
                continue;
            };
            let last = row.iter().rposition(|&p| p != self.background).unwrap_or(first);
            let (y, first, last) = (y as u32, first as u32, last as u32);

            bbox = Some(match bbox {
                None => BoundingBox {
                    left: first,
                    top: y,
                    right: last + 1,
                    bottom: y + 1,
                },
                Some(b) => BoundingBox {
                    left: b.left.min(first),
                    top: b.top,
                    right: b.right.max(last + 1),
                    bottom: y + 1,
                },
            });
        }

        bbox
    }

    /// Copy out a region; parts outside the canvas come back as background
    pub fn crop(&self, region: BoundingBox) -> Canvas {
        let mut out = Canvas::new(region.width(), region.height(), self.background);
        for y in 0..out.height {
            let src_y = region.top + y;
            if src_y >= self.height {
                break;
            }
            for x in 0..out.width {
                let src_x = region.left + x;
                if src_x >= self.width {
                    break;
                }
                out.pixels[(y * out.width + x) as usize] = self.get(src_x, src_y);
            }
        }
        out
    }
}
