use std::num::NonZeroUsize;

use crate::{
    bitplane::GUARD_ROWS,
    util::{PackWord, horizontal_neighbors},
};

#[inline(always)]
fn dilate_word<W: PackWord>(prev: W, cur: W, next: W) -> W {
    let (left, right) = horizontal_neighbors(prev, cur, next);
    left | cur | right
}

#[inline(always)]
fn erode_word<W: PackWord>(prev: W, cur: W, next: W) -> W {
    let (left, right) = horizontal_neighbors(prev, cur, next);
    left & cur & right
}

pub(super) fn dilate_horizontal<W: PackWord>(
    dest: &mut [W],
    src: &[W],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    height: NonZeroUsize,
    tail: W,
) {
    let pitch = pitch.get();
    let row_words = row_words.get();
    debug_assert!(src.len() >= (height.get() + 2 * GUARD_ROWS) * pitch);
    debug_assert_eq!(src.len(), dest.len());

    let mut offset = GUARD_ROWS * pitch;
    for _y in 0..height.get() {
        // One word on each side: the previous row's guard word and our own.
        let window = &src[offset - 1..][..row_words + 2];
        let out = &mut dest[offset..][..row_words];
        for (o, w) in out.iter_mut().zip(window.windows(3)) {
            *o = dilate_word(w[0], w[1], w[2]);
        }
        // The last real pixel spills into the unused bits of a partial word.
        out[row_words - 1] = out[row_words - 1] & tail;
        offset += pitch;
    }
}

pub(super) fn erode_horizontal<W: PackWord>(
    dest: &mut [W],
    src: &[W],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    height: NonZeroUsize,
    tail: W,
) {
    let pitch = pitch.get();
    let row_words = row_words.get();
    let last = row_words - 1;
    debug_assert!(src.len() >= (height.get() + 2 * GUARD_ROWS) * pitch);
    debug_assert_eq!(src.len(), dest.len());

    let mut offset = GUARD_ROWS * pitch;
    for _y in 0..height.get() {
        let window = &src[offset - 1..][..row_words + 2];
        let out = &mut dest[offset..][..row_words];
        for (o, w) in out.iter_mut().zip(window.windows(3)) {
            *o = erode_word(w[0], w[1], w[2]);
        }

        // Redo the edge words with everything outside the row treated as set.
        // `window[k + 1]` is interior word `k`.
        let prev = if last == 0 { W::MAX } else { window[last] };
        out[last] = erode_word(prev, window[last + 1] | !tail, W::MAX) & tail;
        if last > 0 {
            out[0] = erode_word(W::MAX, window[1], window[2]);
        }
        offset += pitch;
    }
}

pub(super) fn dilate_vertical<W: PackWord>(
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
        let below = &src[offset + pitch..][..row_words];
        let out = &mut dest[offset..][..row_words];
        for (((o, &a), &c), &b) in out.iter_mut().zip(above).zip(cur).zip(below) {
            *o = a | c | b;
        }
        offset += pitch;
    }
}

pub(super) fn erode_vertical<W: PackWord>(
    dest: &mut [W],
    src: &[W],
    pitch: NonZeroUsize,
    row_words: NonZeroUsize,
    height: NonZeroUsize,
) {
    let pitch = pitch.get();
    let row_words = row_words.get();
    let height = height.get();
    debug_assert!(src.len() >= (height + 2 * GUARD_ROWS) * pitch);
    debug_assert_eq!(src.len(), dest.len());

    let mut offset = GUARD_ROWS * pitch;
    for y in 0..height {
        // Rows outside the frame count as set.
        let top_fill = if y == 0 { W::MAX } else { W::ZERO };
        let bottom_fill = if y == height - 1 { W::MAX } else { W::ZERO };

        let above = &src[offset - pitch..][..row_words];
        let cur = &src[offset..][..row_words];
        let below = &src[offset + pitch..][..row_words];
        let out = &mut dest[offset..][..row_words];
        for (((o, &a), &c), &b) in out.iter_mut().zip(above).zip(cur).zip(below) {
            *o = (a | top_fill) & c & (b | bottom_fill);
        }
        offset += pitch;
    }
}
