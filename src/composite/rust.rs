use std::num::NonZeroUsize;

use crate::{
    bitplane::GUARD_ROWS,
    frame::Rgba,
    params::Strength,
    util::{PackWord, bits_per_word, for_each_set_bit},
};

#[inline(always)]
fn attenuate_pixel(px: Rgba, strength: Strength) -> Rgba {
    [
        strength.apply(px[0]),
        strength.apply(px[1]),
        strength.apply(px[2]),
        px[3],
    ]
}

#[inline(always)]
fn merge_pixel(px: Rgba, above: Rgba) -> Rgba {
    [
        px[0] | above[0],
        px[1] | above[1],
        px[2] | above[2],
        px[3] | above[3],
    ]
}

#[inline(always)]
fn mask_row<W: PackWord>(mask: &[W], pitch: NonZeroUsize, width: NonZeroUsize, y: usize) -> &[W] {
    let row_words = width.get().div_ceil(bits_per_word::<W>());
    &mask[(y + GUARD_ROWS) * pitch.get()..][..row_words]
}

pub(super) fn attenuate<W: PackWord>(
    dest: &mut [Rgba],
    src: &[Rgba],
    mask: &[W],
    mask_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
    strength: Strength,
) {
    let w = width.get();
    debug_assert_eq!(src.len(), w * height.get());
    debug_assert_eq!(dest.len(), src.len());

    for (y, (dest_row, src_row)) in dest
        .chunks_exact_mut(w)
        .zip(src.chunks_exact(w))
        .enumerate()
    {
        dest_row.copy_from_slice(src_row);
        for_each_set_bit(mask_row(mask, mask_pitch, width, y), |x| {
            dest_row[x] = attenuate_pixel(src_row[x], strength);
        });
    }
}

pub(super) fn attenuate_in_place<W: PackWord>(
    pixels: &mut [Rgba],
    mask: &[W],
    mask_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
    strength: Strength,
) {
    let w = width.get();
    debug_assert_eq!(pixels.len(), w * height.get());

    for (y, row) in pixels.chunks_exact_mut(w).enumerate() {
        for_each_set_bit(mask_row(mask, mask_pitch, width, y), |x| {
            row[x] = attenuate_pixel(row[x], strength);
        });
    }
}

pub(super) fn line_merge<W: PackWord>(
    dest: &mut [Rgba],
    src: &[Rgba],
    mask: &[W],
    mask_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let w = width.get();
    debug_assert_eq!(src.len(), w * height.get());
    debug_assert_eq!(dest.len(), src.len());

    dest.copy_from_slice(src);
    // Row 0 has nothing above it and is left as copied.
    for y in 1..height.get() {
        let above = &src[(y - 1) * w..][..w];
        let cur = &src[y * w..][..w];
        let out = &mut dest[y * w..][..w];
        for_each_set_bit(mask_row(mask, mask_pitch, width, y), |x| {
            out[x] = merge_pixel(cur[x], above[x]);
        });
    }
}

pub(super) fn line_merge_in_place<W: PackWord>(
    pixels: &mut [Rgba],
    mask: &[W],
    mask_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let w = width.get();
    debug_assert_eq!(pixels.len(), w * height.get());

    // Bottom-up, so the row above is still the source when it is read.
    for y in (1..height.get()).rev() {
        let (head, tail) = pixels.split_at_mut(y * w);
        let above = &head[(y - 1) * w..];
        let out = &mut tail[..w];
        for_each_set_bit(mask_row(mask, mask_pitch, width, y), |x| {
            out[x] = merge_pixel(out[x], above[x]);
        });
    }
}
