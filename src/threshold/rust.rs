use std::num::NonZeroUsize;

use crate::{
    bitplane::GUARD_ROWS,
    frame::Rgba,
    util::{PackWord, bits_per_word},
};

pub(super) fn threshold<W: PackWord>(
    dest: &mut [W],
    src: &[Rgba],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let pitch = pitch.get();
    let width = width.get();
    debug_assert!(src.len() >= width * height.get());
    debug_assert!(dest.len() >= (height.get() + 2 * GUARD_ROWS) * pitch);

    let mut offset = GUARD_ROWS * pitch;
    for src_row in src.chunks_exact(width).take(height.get()) {
        let dest_row = &mut dest[offset..][..row_words.get()];
        for (word, pixels) in dest_row
            .iter_mut()
            .zip(src_row.chunks(bits_per_word::<W>()))
        {
            *word = pack_word(pixels);
        }
        offset += pitch;
    }
}

/// Packs up to `W::BITS` pixels, leftmost pixel in bit 0.
#[inline(always)]
fn pack_word<W: PackWord>(pixels: &[Rgba]) -> W {
    pixels
        .iter()
        .enumerate()
        .fold(W::ZERO, |acc, (n, px)| {
            acc | (W::from((px[0] | px[1] | px[2]) != 0) << n as u32)
        })
}
