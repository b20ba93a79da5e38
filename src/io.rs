//! Reading and writing frames and masks as image files.

use std::path::Path;

use anyhow::{Context, Result};
use image::ExtendedColorType;

use crate::{bitplane::Bitplane, frame::Frame, util::PackWord};

/// Loads any format `image` can decode, converted to RGBA8.
pub fn load_frame(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("could not load frame from {}", path.display()))?
        .into_rgba8();
    let (width, height) = img.dimensions();
    Frame::from_raw(width as usize, height as usize, img.as_raw())
}

/// Saves `frame` as RGBA8, picking the format from the file extension.
pub fn save_frame(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image::save_buffer(
        path,
        frame.as_bytes(),
        u32::try_from(frame.width().get())?,
        u32::try_from(frame.height().get())?,
        ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("could not save frame to {}", path.display()))
}

/// Saves `mask` as an 8-bit greyscale image, white where set.
pub fn save_mask<W: PackWord>(mask: &Bitplane<W>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image::save_buffer(
        path,
        &mask.to_luma8(u8::MAX, 0),
        u32::try_from(mask.width().get())?,
        u32::try_from(mask.height().get())?,
        ExtendedColorType::L8,
    )
    .with_context(|| format!("could not save mask to {}", path.display()))
}
