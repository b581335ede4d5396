/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use image::RgbaImage;

use crate::error::{DibitsError, Result};

/// Read-only RGBA view of an image.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Returns `[R, G, B, A]` for the pixel at `(x, y)`.
    fn pixel_at(&self, x: u32, y: u32) -> Result<[u8; 4]>;
}

fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> DibitsError {
    DibitsError::InvalidGrid(format!(
        "pixel ({x}, {y}) is outside of a {width}x{height} grid"
    ))
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel_at(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        self.get_pixel_checked(x, y)
            .map(|px| px.0)
            .ok_or_else(|| out_of_bounds(x, y, self.width(), self.height()))
    }
}

/// Tightly packed RGBA8 rows borrowed from someone else.
#[derive(Debug, Clone, Copy)]
pub struct RawGrid<'a> {
    bytes: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RawGrid<'a> {
    pub fn new(bytes: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                DibitsError::InvalidGrid(format!("{width}x{height} RGBA does not fit in memory"))
            })?;

        if bytes.len() != expected {
            return Err(DibitsError::InvalidGrid(format!(
                "{width}x{height} RGBA needs {expected} bytes, got {}",
                bytes.len()
            )));
        }

        Ok(RawGrid {
            bytes,
            width,
            height,
        })
    }
}

impl PixelGrid for RawGrid<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel_at(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return Err(out_of_bounds(x, y, self.width, self.height));
        }

        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.bytes[offset..offset + 4];
        Ok([px[0], px[1], px[2], px[3]])
    }
}
