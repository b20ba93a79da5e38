//! AVX2 row combinators shared by the word-parallel kernels.
//!
//! Vertical passes and the row XOR never shift bits across words, so a row
//! can be processed as plain bytes regardless of the pack word type.

#![allow(clippy::undocumented_unsafe_blocks)]

use std::arch::x86_64::*;

const LANE: usize = 32;

/// `dest[i] = above[i] | cur[i] | below[i]` for `len` bytes.
#[target_feature(enable = "avx2")]
pub unsafe fn or3_row(dest: *mut u8, above: *const u8, cur: *const u8, below: *const u8, len: usize) {
    let mut i = 0;
    while i + LANE <= len {
        let a = _mm256_loadu_si256(above.add(i) as *const __m256i);
        let c = _mm256_loadu_si256(cur.add(i) as *const __m256i);
        let b = _mm256_loadu_si256(below.add(i) as *const __m256i);
        _mm256_storeu_si256(
            dest.add(i) as *mut __m256i,
            _mm256_or_si256(_mm256_or_si256(a, c), b),
        );
        i += LANE;
    }

    while i < len {
        *dest.add(i) = *above.add(i) | *cur.add(i) | *below.add(i);
        i += 1;
    }
}

/// `dest[i] = (above[i] | top_fill) & cur[i] & (below[i] | bottom_fill)` for `len` bytes.
///
/// The fills let the first and last rows treat the outside of the frame as set.
#[target_feature(enable = "avx2")]
pub unsafe fn and3_row(
    dest: *mut u8,
    above: *const u8,
    cur: *const u8,
    below: *const u8,
    len: usize,
    top_fill: u8,
    bottom_fill: u8,
) {
    let top = _mm256_set1_epi8(top_fill as i8);
    let bottom = _mm256_set1_epi8(bottom_fill as i8);

    let mut i = 0;
    while i + LANE <= len {
        let a = _mm256_or_si256(_mm256_loadu_si256(above.add(i) as *const __m256i), top);
        let c = _mm256_loadu_si256(cur.add(i) as *const __m256i);
        let b = _mm256_or_si256(_mm256_loadu_si256(below.add(i) as *const __m256i), bottom);
        _mm256_storeu_si256(
            dest.add(i) as *mut __m256i,
            _mm256_and_si256(_mm256_and_si256(a, c), b),
        );
        i += LANE;
    }

    while i < len {
        *dest.add(i) = (*above.add(i) | top_fill) & *cur.add(i) & (*below.add(i) | bottom_fill);
        i += 1;
    }
}

/// `dest[i] = above[i] ^ cur[i]` for `len` bytes.
#[target_feature(enable = "avx2")]
pub unsafe fn xor2_row(dest: *mut u8, above: *const u8, cur: *const u8, len: usize) {
    let mut i = 0;
    while i + LANE <= len {
        let a = _mm256_loadu_si256(above.add(i) as *const __m256i);
        let c = _mm256_loadu_si256(cur.add(i) as *const __m256i);
        _mm256_storeu_si256(dest.add(i) as *mut __m256i, _mm256_xor_si256(a, c));
        i += LANE;
    }

    while i < len {
        *dest.add(i) = *above.add(i) ^ *cur.add(i);
        i += 1;
    }
}
