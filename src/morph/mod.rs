#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;


use cfg_if::cfg_if;

use crate::{bitplane::Bitplane, params::RefineOrder, util::PackWord};

/// Signature shared by the four morphological passes.
pub type MorphFn<W> = fn(&mut Bitplane<W>, &Bitplane<W>);

/// Sets each pixel whose left neighbor, itself, or right neighbor is set.
///
/// Neighbors are taken along the logical row, so the last pixel of one word
/// and the first pixel of the next are adjacent. Pixels outside the frame
/// count as clear.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn dilate_horizontal<W: PackWord>(dest: &mut Bitplane<W>, src: &Bitplane<W>) {
    dest.assert_same_shape(src, "dilate_horizontal");
    let pitch = src.pitch();
    let row_words = src.row_words();
    let height = src.height();
    let tail = src.tail_mask();

    rust::dilate_horizontal(dest.words_mut(), src.words(), pitch, row_words, height, tail);
}

/// Keeps each pixel whose left neighbor, itself, and right neighbor are all set.
///
/// Pixels outside the frame count as set, so erosion never eats into a
/// region just because it touches the left or right border.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn erode_horizontal<W: PackWord>(dest: &mut Bitplane<W>, src: &Bitplane<W>) {
    dest.assert_same_shape(src, "erode_horizontal");
    let pitch = src.pitch();
    let row_words = src.row_words();
    let height = src.height();
    let tail = src.tail_mask();

    rust::erode_horizontal(dest.words_mut(), src.words(), pitch, row_words, height, tail);
}

/// Sets each pixel whose upper neighbor, itself, or lower neighbor is set.
///
/// Rows are word aligned, so this is a plain OR of three words with no
/// shifting. The guard rows supply the clear neighbors of the first and
/// last rows.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn dilate_vertical<W: PackWord>(dest: &mut Bitplane<W>, src: &Bitplane<W>) {
    dest.assert_same_shape(src, "dilate_vertical");
    let pitch = src.pitch();
    let row_words = src.row_words();
    let height = src.height();

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::dilate_vertical(dest.words_mut(), src.words(), pitch, row_words, height);
                }
                return;
            }
        }
    }

    rust::dilate_vertical(dest.words_mut(), src.words(), pitch, row_words, height);
}

/// Keeps each pixel whose upper neighbor, itself, and lower neighbor are all set.
///
/// Rows outside the frame count as set.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn erode_vertical<W: PackWord>(dest: &mut Bitplane<W>, src: &Bitplane<W>) {
    dest.assert_same_shape(src, "erode_vertical");
    let pitch = src.pitch();
    let row_words = src.row_words();
    let height = src.height();

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::erode_vertical(dest.words_mut(), src.words(), pitch, row_words, height);
                }
                return;
            }
        }
    }

    rust::erode_vertical(dest.words_mut(), src.words(), pitch, row_words, height);
}

/// Runs `passes` rounds of one operator followed by `passes` rounds of the other.
///
/// Each round is a horizontal pass into `scratch` followed by a vertical pass
/// back into `mask`, so the refined result always ends up in `mask`. With
/// [`RefineOrder::DilateFirst`] the mask is grown and then tightened
/// (a closing); [`RefineOrder::ErodeFirst`] gives an opening. Zero passes
/// leave `mask` as it is.
///
/// # Panics
/// Panics if `mask` and `scratch` have different dimensions.
pub fn refine<W: PackWord>(
    mask: &mut Bitplane<W>,
    scratch: &mut Bitplane<W>,
    passes: usize,
    order: RefineOrder,
) {
    mask.assert_same_shape(scratch, "refine");

    let dilate: [MorphFn<W>; 2] = [dilate_horizontal, dilate_vertical];
    let erode: [MorphFn<W>; 2] = [erode_horizontal, erode_vertical];
    let stages = match order {
        RefineOrder::DilateFirst => [dilate, erode],
        RefineOrder::ErodeFirst => [erode, dilate],
    };

    for [horizontal, vertical] in stages {
        for _ in 0..passes {
            horizontal(scratch, mask);
            vertical(mask, scratch);
        }
    }
}
