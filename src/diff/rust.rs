use std::num::NonZeroUsize;

use crate::{bitplane::GUARD_ROWS, util::PackWord};

pub(super) fn temporal_diff<W: PackWord>(
    dest: &mut [W],
    src: &[W],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    height: NonZeroUsize,
) {
    let pitch = pitch.get();
    let row_words = row_words.get();
    debug_assert!(src.len() >= (height.get() + 2 * GUARD_ROWS) * pitch);
    debug_assert_eq!(src.len(), dest.len());

    let mut offset = GUARD_ROWS * pitch;
    for _y in 0..height.get() {
        let above = &src[offset - pitch..][..row_words];
        let cur = &src[offset..][..row_words];
        let out = &mut dest[offset..][..row_words];
        for ((o, &a), &c) in out.iter_mut().zip(above).zip(cur) {
            *o = a ^ c;
        }
        offset += pitch;
    }
}
