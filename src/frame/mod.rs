
use std::num::NonZeroUsize;

use anyhow::{Result, bail};

/// One 8-bit-per-channel pixel in R, G, B, A order.
pub type Rgba = [u8; 4];

pub const CHANNELS: usize = 4;

/// A row-major RGBA frame with its origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: NonZeroUsize,
    height: NonZeroUsize,
    pixels: Vec<Rgba>,
}

fn checked_dimensions(width: usize, height: usize) -> Result<(NonZeroUsize, NonZeroUsize)> {
    let Some(nz_width) = NonZeroUsize::new(width) else {
        bail!("Frame width must be greater than zero");
    };
    let Some(nz_height) = NonZeroUsize::new(height) else {
        bail!("Frame height must be greater than zero");
    };
    if width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .is_none_or(|bytes| bytes > isize::MAX as usize)
    {
        bail!("Frame of {width}x{height} is too large");
    }
    Ok((nz_width, nz_height))
}

impl Frame {
    /// Allocates a fully transparent black frame.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let (w, h) = checked_dimensions(width, height)?;
        Ok(Self {
            width: w,
            height: h,
            pixels: vec![[0; CHANNELS]; width * height],
        })
    }

    /// Wraps an existing pixel buffer.
    ///
    /// # Panics
    /// Panics if `pixels` does not hold exactly `width * height` entries.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self> {
        let (w, h) = checked_dimensions(width, height)?;
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel buffer does not match a {width}x{height} frame"
        );
        Ok(Self {
            width: w,
            height: h,
            pixels,
        })
    }

    /// Builds a frame from interleaved RGBA bytes, as produced by most decoders.
    ///
    /// # Panics
    /// Panics if `bytes` does not hold exactly `width * height * 4` entries.
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        let (w, h) = checked_dimensions(width, height)?;
        assert_eq!(
            bytes.len(),
            width * height * CHANNELS,
            "byte buffer does not match a {width}x{height} RGBA frame"
        );
        let pixels = bytes
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Ok(Self {
            width: w,
            height: h,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> NonZeroUsize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> NonZeroUsize {
        self.height
    }

    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Interleaved RGBA bytes, `width * height * 4` long.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    #[must_use]
    pub fn row(&self, y: usize) -> &[Rgba] {
        let width = self.width.get();
        &self.pixels[y * width..][..width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let width = self.width.get();
        &mut self.pixels[y * width..][..width]
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.row(y)[x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, value: Rgba) {
        self.row_mut(y)[x] = value;
    }
}
