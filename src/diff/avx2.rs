#![allow(clippy::undocumented_unsafe_blocks)]

use std::num::NonZeroUsize;

use crate::{bitplane::GUARD_ROWS, simd::xor2_row, util::PackWord};

#[target_feature(enable = "avx2")]
pub(super) fn temporal_diff<W: PackWord>(
    dest: &mut [W],
    src: &[W],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    height: NonZeroUsize,
) {
    assert!(src.len() >= (height.get() + 2 * GUARD_ROWS) * pitch.get());
    assert_eq!(src.len(), dest.len());

    let pitch_bytes = pitch.get() * size_of::<W>();
    let row_bytes = row_words.get() * size_of::<W>();
    let src = src.as_ptr() as *const u8;
    let dest = dest.as_mut_ptr() as *mut u8;

    let mut offset = GUARD_ROWS * pitch_bytes;
    for _y in 0..height.get() {
        unsafe {
            xor2_row(
                dest.add(offset),
                src.add(offset - pitch_bytes),
                src.add(offset),
                row_bytes,
            );
        }
        offset += pitch_bytes;
    }
}
