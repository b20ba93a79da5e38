#![allow(clippy::unwrap_used, reason = "allow in test files")]

use pastey::paste;

use super::*;
use crate::tests::{plane_from_rows, random_plane};

#[test]
fn test_new_rejects_zero_dimensions() {
    assert!(Bitplane::<u64>::new(0, 4).is_err());
    assert!(Bitplane::<u64>::new(64, 0).is_err());
}

#[test]
fn test_new_rejects_overflowing_dimensions() {
    assert!(Bitplane::<u8>::new(usize::MAX, 2).is_err());
    assert!(Bitplane::<u64>::new(64, usize::MAX).is_err());
}

#[test]
fn test_new_rejects_planes_over_isize_max_bytes() {
    // The word count fits in a usize but the byte size does not fit in an isize.
    assert!(Bitplane::<u64>::new(64, usize::MAX / 4).is_err());
    assert!(Bitplane::<u8>::new(8, usize::MAX / 3).is_err());
}

#[test]
fn test_layout_u64() {
    let plane = Bitplane::<u64>::new(640, 480).unwrap();

    assert_eq!(plane.row_words().get(), 10);
    assert_eq!(plane.pitch().get(), 11);
    assert_eq!(plane.row_offset(), 11);
    assert_eq!(plane.words().len(), 11 * 482);
    assert_eq!(plane.index(0, 0), 11);
    assert_eq!(plane.index(3, 2), 11 + 2 * 11 + 3);
}

#[test]
fn test_layout_pads_partial_words() {
    let plane = Bitplane::<u8>::new(13, 2).unwrap();

    assert_eq!(plane.row_words().get(), 2);
    assert_eq!(plane.pitch().get(), 3);
    assert_eq!(plane.tail_mask(), 0b0001_1111);
    assert_eq!(plane.words().len(), 3 * 4);
}

macro_rules! access_tests {
    ($word:ty) => {
        paste! {
            #[test]
            fn [<test_get_set_round_trip_ $word>]() {
                let mut plane = Bitplane::<$word>::new(100, 3).unwrap();
                plane.set(0, 0, true);
                plane.set(99, 2, true);
                plane.set(<$word>::BITS as usize, 1, true);

                assert!(plane.get(0, 0));
                assert!(plane.get(99, 2));
                assert!(plane.get(<$word>::BITS as usize, 1));
                assert!(!plane.get(1, 0));
                assert_eq!(plane.count_ones(), 3);
                assert!(plane.padding_is_clear());

                plane.set(99, 2, false);
                assert!(!plane.get(99, 2));
                assert_eq!(plane.count_ones(), 2);
            }

            #[test]
            fn [<test_bit_order_ $word>]() {
                // Leftmost pixel is bit 0 of the first word.
                let mut plane = Bitplane::<$word>::new(<$word>::BITS as usize * 2, 1).unwrap();
                plane.set(0, 0, true);
                plane.set(<$word>::BITS as usize + 1, 0, true);

                assert_eq!(plane.row(0)[0], 1);
                assert_eq!(plane.row(0)[1], 2);
            }

            #[test]
            fn [<test_clear_tail_ $word>]() {
                let mut plane = Bitplane::<$word>::new(5, 2).unwrap();
                for y in 0..2 {
                    let row = plane.row_mut(y);
                    row[0] = <$word>::MAX;
                }
                assert!(!plane.padding_is_clear());

                plane.clear_tail();
                assert!(plane.padding_is_clear());
                assert_eq!(plane.count_ones(), 10);
            }
        }
    };
}

access_tests!(u8);
access_tests!(u32);
access_tests!(u64);

#[test]
fn test_padding_detects_dirty_guard_word() {
    let mut plane = Bitplane::<u64>::new(64, 2).unwrap();
    assert!(plane.padding_is_clear());

    let idx = plane.index(1, 0);
    plane.words_mut()[idx] = 1;
    assert!(!plane.padding_is_clear());
}

#[test]
fn test_padding_detects_dirty_guard_row() {
    let mut plane = Bitplane::<u32>::new(64, 2).unwrap();
    let last = plane.words().len() - 1;
    plane.words_mut()[last] = 0x8000_0000;
    assert!(!plane.padding_is_clear());

    plane.clear();
    plane.words_mut()[0] = 1;
    assert!(!plane.padding_is_clear());
}

#[test]
#[should_panic(expected = "outside")]
fn test_set_rejects_padding_pixels() {
    let mut plane = Bitplane::<u8>::new(5, 1).unwrap();
    plane.set(5, 0, true);
}

#[test]
fn test_is_subset_of() {
    let small = plane_from_rows::<u8>(&["..#.", "...."]);
    let big = plane_from_rows::<u8>(&[".##.", "..#."]);

    assert!(small.is_subset_of(&big));
    assert!(!big.is_subset_of(&small));
    assert!(big.is_subset_of(&big));
}

#[test]
#[should_panic(expected = "shapes differ")]
fn test_is_subset_of_rejects_mismatched_shapes() {
    let a = Bitplane::<u8>::new(8, 2).unwrap();
    let b = Bitplane::<u8>::new(8, 3).unwrap();
    let _ = a.is_subset_of(&b);
}

#[test]
fn test_to_luma8() {
    let plane = plane_from_rows::<u8>(&["#..", ".##"]);
    assert_eq!(plane.to_luma8(255, 0), vec![255, 0, 0, 0, 255, 255]);
    assert_eq!(plane.to_luma8(1, 9), vec![1, 9, 9, 9, 1, 1]);
}

#[test]
fn test_random_plane_keeps_padding_clear() {
    let plane = random_plane::<u64>(130, 7, 42);
    assert!(plane.padding_is_clear());
    assert!(plane.count_ones() > 0);
}
