//! Packed 32-bit pixel buffers
//!
//! A [`PixelBuffer`] is the off-screen surface the shell hands to a game's
//! render call and to the present filters. Every pixel is one `u32` laid out
//! as `0xXXRRGGBB`, which in little-endian memory is `B, G, R, X` - the same
//! layout as a 32-bpp `BI_RGB` bitmap. The `X` byte is unused by convention
//! but it is still part of the value, so filters that compare pixels see it.
//!
//! Rows are stored top to bottom and the buffer never changes size after it
//! is created.

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Largest width or height a buffer may have.
pub const MAX_DIMENSION: u32 = 16384;

const PADDING_MASK: u32 = 0xFF00_0000;

/// Error type for buffer construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The pixel vector does not hold exactly `width * height` pixels
    #[error("expected {expected} pixels for {width}x{height}, got {actual}")]
    LengthMismatch { width: u32, height: u32, expected: usize, actual: usize },
    /// Width or height exceeds [`MAX_DIMENSION`]
    #[error("dimensions {0}x{1} exceed the maximum of {}", MAX_DIMENSION)]
    TooLarge(u32, u32),
}

/// Pack an opaque color. The padding byte is zero.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    pack_rgbx(r, g, b, 0)
}

/// Pack a color including an explicit padding byte.
pub const fn pack_rgbx(r: u8, g: u8, b: u8, x: u8) -> u32 {
    ((x as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a packed pixel into `(r, g, b, x)`.
pub const fn unpack(pixel: u32) -> (u8, u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8, (pixel >> 24) as u8)
}

/// A fixed-size grid of packed pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to zero (black).
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width as usize * height as usize] }
    }

    /// Wrap an existing pixel vector.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, BufferError> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BufferError::TooLarge(width, height));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set one pixel. Writes outside the buffer are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: u32) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    /// Signed variant of [`set`](Self::set) for drawing code that may run
    /// off the left or top edge.
    pub fn plot(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 {
            self.set(x as u32, y as u32, color);
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill the rectangle from `(x0, y0)` to `(x1, y1)` inclusive, clipped
    /// to the buffer.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        for y in y0.max(0)..=y1.min(self.height as i32 - 1) {
            for x in x0.max(0)..=x1.min(self.width as i32 - 1) {
                let i = self.index(x as u32, y as u32);
                self.pixels[i] = color;
            }
        }
    }

    /// Draw the outline of a rectangle, clipped to the buffer.
    pub fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        self.hline(x0, x1, y0, color);
        self.hline(x0, x1, y1, color);
        self.vline(x0, y0, y1, color);
        self.vline(x1, y0, y1, color);
    }

    /// Horizontal line from `x0` to `x1` inclusive at row `y`.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: u32) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.plot(x, y, color);
        }
    }

    /// Vertical line from `y0` to `y1` inclusive at column `x`.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: u32) {
        for y in y0.min(y1)..=y0.max(y1) {
            self.plot(x, y, color);
        }
    }

    /// Zero the padding byte of every pixel.
    ///
    /// Two pixels that differ only in padding compare unequal in the filters,
    /// which turns edge smoothing off between them. Clearing the byte first
    /// makes the filters compare color only.
    pub fn clear_padding(&mut self) {
        for p in &mut self.pixels {
            *p &= !PADDING_MASK;
        }
    }

    /// One row of pixels, or an empty slice past the last row.
    pub fn row(&self, y: u32) -> &[u32] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Convert an RGBA image. Alpha is stored in the padding byte.
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, BufferError> {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|Rgba([r, g, b, a])| pack_rgbx(*r, *g, *b, *a)).collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Convert to an RGBA image. The padding byte becomes alpha, except that a
    /// zero padding byte is written as fully opaque.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b, x_byte) = unpack(self.pixels[self.index(x, y)]);
            let alpha = if x_byte == 0 { 255 } else { x_byte };
            Rgba([r, g, b, alpha])
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
