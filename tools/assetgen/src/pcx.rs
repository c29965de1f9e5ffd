//! PCX picture format (8-bit indexed, run-length encoded)
//!
//! Only the flavor the game loads is supported: version 5, one 8-bit plane,
//! RLE encoding and a 256-color palette appended after the pixel data.
//!
//! # Layout
//! ```text
//! 0x000: header (128 bytes, see PcxHeader)
//! 0x080: RLE scanlines (bytes_per_line decoded bytes each)
//! end-769: 0x0C palette marker
//! end-768: palette (256 × RGB)
//! ```
//!
//! RLE: a byte with the top two bits set is a run count (`byte & 0x3F`)
//! followed by the value to repeat. Any other byte is a literal pixel.

use crate::palette::Palette;

pub const MANUFACTURER: u8 = 0x0A;
pub const VERSION: u8 = 5;
pub const ENCODING_RLE: u8 = 1;
pub const PALETTE_MARKER: u8 = 0x0C;
/// Largest width or height the engine's loader accepts
pub const MAX_DIMENSION: u32 = 4096;

const RUN_FLAG: u8 = 0xC0;
const MAX_RUN: usize = 0x3F;
const DPI: u16 = 100;

/// Errors produced while reading or writing PCX data
#[derive(Debug, thiserror::Error)]
pub enum PcxError {
    #[error("PCX data too short ({0} bytes)")]
    Truncated(usize),

    #[error("Not a PCX file (manufacturer byte {0:#04x})")]
    BadManufacturer(u8),

    #[error("Unsupported PCX variant: version {version}, encoding {encoding}, {bits} bits, {planes} planes")]
    Unsupported {
        version: u8,
        encoding: u8,
        bits: u8,
        planes: u8,
    },

    #[error("Invalid PCX dimensions {0}x{1} (must be 1..={max})", max = MAX_DIMENSION)]
    InvalidDimensions(u32, u32),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("Missing 256-color palette marker")]
    MissingPalette,

    #[error("RLE data ends before the image is complete")]
    UnexpectedEnd,
}

/// PCX header (128 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcxHeader {
    pub manufacturer: u8,
    pub version: u8,
    pub encoding: u8,
    pub bits_per_pixel: u8,
    pub xmin: u16,
    pub ymin: u16,
    pub xmax: u16,
    pub ymax: u16,
    pub hdpi: u16,
    pub vdpi: u16,
    pub planes: u8,
    pub bytes_per_line: u16,
    pub palette_info: u16,
    pub hscreen: u16,
    pub vscreen: u16,
}

impl PcxHeader {
    pub const SIZE: usize = 128;

    /// Header for an 8-bit single-plane picture of the given size
    ///
    /// Scanlines are padded to an even byte count.
    pub fn new(width: u16, height: u16) -> Self {
        let stride = width + width % 2;
        Self {
            manufacturer: MANUFACTURER,
            version: VERSION,
            encoding: ENCODING_RLE,
            bits_per_pixel: 8,
            xmin: 0,
            ymin: 0,
            xmax: width.saturating_sub(1),
            ymax: height.saturating_sub(1),
            hdpi: DPI,
            vdpi: DPI,
            planes: 1,
            bytes_per_line: stride,
            palette_info: 1,
            hscreen: width,
            vscreen: height,
        }
    }

    pub fn width(&self) -> u32 {
        (self.xmax as u32 + 1).saturating_sub(self.xmin as u32)
    }

    pub fn height(&self) -> u32 {
        (self.ymax as u32 + 1).saturating_sub(self.ymin as u32)
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.manufacturer;
        bytes[1] = self.version;
        bytes[2] = self.encoding;
        bytes[3] = self.bits_per_pixel;
        bytes[4..6].copy_from_slice(&self.xmin.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.ymin.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.xmax.to_le_bytes());
        bytes[10..12].copy_from_slice(&self.ymax.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.hdpi.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.vdpi.to_le_bytes());
        // 16-color EGA palette: unused for 8-bit pictures
        bytes[40..64].fill(0xFF);
        bytes[65] = self.planes;
        bytes[66..68].copy_from_slice(&self.bytes_per_line.to_le_bytes());
        bytes[68..70].copy_from_slice(&self.palette_info.to_le_bytes());
        bytes[70..72].copy_from_slice(&self.hscreen.to_le_bytes());
        bytes[72..74].copy_from_slice(&self.vscreen.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let u16_at = |offset: usize| u16::from_le_bytes([bytes[offset], bytes[offset + 1]]);
        Some(Self {
            manufacturer: bytes[0],
            version: bytes[1],
            encoding: bytes[2],
            bits_per_pixel: bytes[3],
            xmin: u16_at(4),
            ymin: u16_at(6),
            xmax: u16_at(8),
            ymax: u16_at(10),
            hdpi: u16_at(12),
            vdpi: u16_at(14),
            planes: bytes[65],
            bytes_per_line: u16_at(66),
            palette_info: u16_at(68),
            hscreen: u16_at(70),
            vscreen: u16_at(72),
        })
    }
}

/// Decoded PCX picture
#[derive(Debug, Clone)]
pub struct PcxImage {
    pub width: u32,
    pub height: u32,
    /// Palette indices, row-major
    pub pixels: Vec<u8>,
    pub palette: Palette,
}

/// Encode an indexed picture with the given palette
pub fn encode(
    width: u32,
    height: u32,
    pixels: &[u8],
    palette: &Palette,
) -> Result<Vec<u8>, PcxError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PcxError::InvalidDimensions(width, height));
    }
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(PcxError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let header = PcxHeader::new(width as u16, height as u16);
    let stride = header.bytes_per_line as usize;

    let mut out = Vec::with_capacity(PcxHeader::SIZE + expected + 1 + Palette::SIZE);
    out.extend_from_slice(&header.to_bytes());

    let mut line = vec![0u8; stride];
    for row in pixels.chunks_exact(width as usize) {
        line[..row.len()].copy_from_slice(row);
        encode_scanline(&line, &mut out);
    }

    out.push(PALETTE_MARKER);
    out.extend_from_slice(&palette.to_bytes());
    Ok(out)
}

/// RLE-encode one scanline (runs never cross scanline boundaries)
fn encode_scanline(line: &[u8], out: &mut Vec<u8>) {
    let mut i = 0;
    while i < line.len() {
        let value = line[i];
        let mut run = 1;
        while i + run < line.len() && line[i + run] == value && run < MAX_RUN {
            run += 1;
        }
        if run > 1 || value >= RUN_FLAG {
            out.push(RUN_FLAG | run as u8);
        }
        out.push(value);
        i += run;
    }
}

/// Decode a complete PCX file
pub fn decode(data: &[u8]) -> Result<PcxImage, PcxError> {
    let header = PcxHeader::from_bytes(data).ok_or(PcxError::Truncated(data.len()))?;

    if header.manufacturer != MANUFACTURER {
        return Err(PcxError::BadManufacturer(header.manufacturer));
    }
    if header.version != VERSION
        || header.encoding != ENCODING_RLE
        || header.bits_per_pixel != 8
        || header.planes != 1
    {
        return Err(PcxError::Unsupported {
            version: header.version,
            encoding: header.encoding,
            bits: header.bits_per_pixel,
            planes: header.planes,
        });
    }

    let width = header.width();
    let height = header.height();
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PcxError::InvalidDimensions(width, height));
    }

    if data.len() < PcxHeader::SIZE + 1 + Palette::SIZE {
        return Err(PcxError::Truncated(data.len()));
    }
    let palette_start = data.len() - Palette::SIZE;
    if data[palette_start - 1] != PALETTE_MARKER {
        return Err(PcxError::MissingPalette);
    }
    let palette = Palette::from_bytes(&data[palette_start..]).ok_or(PcxError::MissingPalette)?;

    let stride = (header.bytes_per_line as usize).max(width as usize);
    let encoded = &data[PcxHeader::SIZE..palette_start - 1];
    let decoded = decode_rle(encoded, stride * height as usize)?;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for line in decoded.chunks_exact(stride) {
        pixels.extend_from_slice(&line[..width as usize]);
    }

    Ok(PcxImage {
        width,
        height,
        pixels,
        palette,
    })
}

fn decode_rle(mut data: &[u8], len: usize) -> Result<Vec<u8>, PcxError> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        let (&byte, rest) = data.split_first().ok_or(PcxError::UnexpectedEnd)?;
        data = rest;
        if byte & RUN_FLAG == RUN_FLAG {
            let (&value, rest) = data.split_first().ok_or(PcxError::UnexpectedEnd)?;
            data = rest;
            let run = (byte & MAX_RUN as u8) as usize;
            out.extend(std::iter::repeat_n(value, run.min(len - out.len())));
        } else {
            out.push(byte);
        }
    }
    Ok(out)
}
