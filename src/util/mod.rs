
use std::{
    fmt::Debug,
    num::NonZeroUsize,
    ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr},
};

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(cpuid_avx2, "avx2");

#[cfg(target_arch = "x86_64")]
pub use cpuid_avx2::get as has_avx2;

/// An unsigned integer used to store mask bits contiguously.
///
/// Bit 0 of a word holds the leftmost pixel of the word's span, and
/// increasing bit indices move rightward across the frame. Every operator
/// in this crate relies on that ordering, including the carry between
/// adjacent words in the horizontal passes.
pub trait PackWord:
    Clone
    + Copy
    + Debug
    + Default
    + PartialEq
    + Eq
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + From<bool>
    + 'static
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    #[must_use]
    fn count_ones(self) -> u32;

    #[must_use]
    fn trailing_zeros(self) -> u32;
}

macro_rules! impl_pack_word {
    ($($t:ty),*) => {
        $(
            impl PackWord for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }
            }
        )*
    };
}

impl_pack_word!(u8, u16, u32, u64);

/// Number of pixels stored in a single `W`.
#[must_use]
pub const fn bits_per_word<W: PackWord>() -> usize {
    W::BITS as usize
}

/// Number of words required to hold `width` pixels.
#[must_use]
pub fn words_for_width<W: PackWord>(width: NonZeroUsize) -> NonZeroUsize {
    // SAFETY: width is non-zero, so at least one word is needed
    unsafe { NonZeroUsize::new_unchecked(width.get().div_ceil(bits_per_word::<W>())) }
}

/// Mask of the bits in a row's last word that map to real pixels.
///
/// When `width` is a multiple of the word size every bit is valid and the
/// mask is all ones. Otherwise only the low `width % BITS` bits are set.
#[must_use]
pub fn tail_mask<W: PackWord>(width: NonZeroUsize) -> W {
    let rem = (width.get() % bits_per_word::<W>()) as u32;
    if rem == 0 { W::MAX } else { !(W::MAX << rem) }
}

/// Left and right neighbor planes for the bits of `cur`.
///
/// Bit `n` of the first result holds pixel `n - 1` and bit `n` of the second
/// holds pixel `n + 1`. The pixels straddling the word edges come from the
/// last bit of `prev` and the first bit of `next`.
#[inline(always)]
#[must_use]
pub fn horizontal_neighbors<W: PackWord>(prev: W, cur: W, next: W) -> (W, W) {
    let left = (cur << 1) | (prev >> (W::BITS - 1));
    let right = (cur >> 1) | (next << (W::BITS - 1));
    (left, right)
}

/// Calls `f` with the pixel index of every set bit in `row`, left to right.
#[inline]
pub fn for_each_set_bit<W: PackWord>(row: &[W], mut f: impl FnMut(usize)) {
    let bits = bits_per_word::<W>();
    for (i, &word) in row.iter().enumerate() {
        let mut word = word;
        while word != W::ZERO {
            let n = word.trailing_zeros();
            f(i * bits + n as usize);
            word = word & !(W::ONE << n);
        }
    }
}
