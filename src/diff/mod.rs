#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;


use cfg_if::cfg_if;

use crate::{bitplane::Bitplane, util::PackWord};

/// XORs every row of `src` with the row directly above it.
///
/// `dest[y] = src[y] ^ src[y - 1]`, taken within a single frame: set bits
/// mark horizontal edges, which combed interlaced content produces on nearly
/// every line. Row 0 is XORed against the zero guard row and therefore comes
/// out equal to `src[0]`.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn temporal_diff<W: PackWord>(dest: &mut Bitplane<W>, src: &Bitplane<W>) {
    dest.assert_same_shape(src, "temporal_diff");
    let pitch = src.pitch();
    let row_words = src.row_words();
    let height = src.height();

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::temporal_diff(dest.words_mut(), src.words(), pitch, row_words, height);
                }
                return;
            }
        }
    }

    rust::temporal_diff(dest.words_mut(), src.words(), pitch, row_words, height);
}
