#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;

use anyhow::{Result, bail};

use crate::util::{PackWord, bits_per_word, tail_mask, words_for_width};

/// Rows of zero padding kept above row 0 and below the last row.
pub const GUARD_ROWS: usize = 1;

/// Words of zero padding kept at the trailing edge of every row.
///
/// The trailing word of row `y` doubles as the leading guard of row `y + 1`,
/// so the horizontal operators can read `index - 1` and `index + 1` for any
/// interior word without bounds checks.
pub const GUARD_WORDS: usize = 1;

/// A 1-bit-per-pixel mask packed into words of type `W`.
///
/// The backing buffer holds `height + 2 * GUARD_ROWS` rows of `pitch` words.
/// Interior word `x` of row `y` lives at `(y + GUARD_ROWS) * pitch + x`.
/// Guard rows, guard words and the unused high bits of each row's last
/// interior word are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitplane<W: PackWord = u64> {
    width: NonZeroUsize,
    height: NonZeroUsize,
    row_words: NonZeroUsize,
    pitch: NonZeroUsize,
    data: Vec<W>,
}

impl<W: PackWord> Bitplane<W> {
    /// Allocates a zeroed plane for a `width` x `height` frame.
    ///
    /// Fails if either dimension is zero or the padded buffer would not fit
    /// in memory. Widths that are not a multiple of the word size are padded
    /// up to a whole number of words.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let Some(width) = NonZeroUsize::new(width) else {
            bail!("Bitplane width must be greater than zero");
        };
        let Some(height) = NonZeroUsize::new(height) else {
            bail!("Bitplane height must be greater than zero");
        };

        let row_words = words_for_width::<W>(width);
        let Some(pitch) = row_words.checked_add(GUARD_WORDS) else {
            bail!("Bitplane width {width} is too large");
        };
        let Some(len) = height
            .get()
            .checked_add(2 * GUARD_ROWS)
            .and_then(|rows| rows.checked_mul(pitch.get()))
        else {
            bail!("Bitplane of {width}x{height} is too large");
        };
        // `Vec` cannot hold more than `isize::MAX` bytes.
        if len
            .checked_mul(size_of::<W>())
            .is_none_or(|bytes| bytes > isize::MAX as usize)
        {
            bail!("Bitplane of {width}x{height} is too large");
        }

        Ok(Self {
            width,
            height,
            row_words,
            pitch,
            data: vec![W::ZERO; len],
        })
    }

    #[must_use]
    pub fn width(&self) -> NonZeroUsize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> NonZeroUsize {
        self.height
    }

    /// Interior words per row, excluding the trailing guard word.
    #[must_use]
    pub fn row_words(&self) -> NonZeroUsize {
        self.row_words
    }

    /// Words between the starts of two consecutive rows.
    #[must_use]
    pub fn pitch(&self) -> NonZeroUsize {
        self.pitch
    }

    /// Offset in words of the first interior row.
    #[must_use]
    pub fn row_offset(&self) -> usize {
        GUARD_ROWS * self.pitch.get()
    }

    /// Mask of the valid bits in the last interior word of a row.
    #[must_use]
    pub fn tail_mask(&self) -> W {
        tail_mask::<W>(self.width)
    }

    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Panics unless `other` has the same logical dimensions.
    pub(crate) fn assert_same_shape(&self, other: &Self, op: &str) {
        assert!(
            self.same_shape(other),
            "{op}: bitplane shapes differ ({}x{} vs {}x{})",
            self.width,
            self.height,
            other.width,
            other.height
        );
        debug_assert_eq!(self.data.len(), other.data.len());
    }

    /// Position of interior word `x` of row `y` in the backing buffer.
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.pitch.get());
        debug_assert!(y < self.height.get());
        self.row_offset() + y * self.pitch.get() + x
    }

    /// The whole backing buffer, guards included.
    #[must_use]
    pub fn words(&self) -> &[W] {
        &self.data
    }

    pub(crate) fn words_mut(&mut self) -> &mut [W] {
        &mut self.data
    }

    /// Interior words of row `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> &[W] {
        let start = self.index(0, y);
        &self.data[start..][..self.row_words.get()]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [W] {
        let start = self.index(0, y);
        let row_words = self.row_words.get();
        &mut self.data[start..][..row_words]
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(
            x < self.width.get() && y < self.height.get(),
            "pixel ({x}, {y}) is outside a {}x{} bitplane",
            self.width,
            self.height
        );
        let bits = bits_per_word::<W>();
        let word = self.data[self.index(x / bits, y)];
        word & (W::ONE << (x % bits) as u32) != W::ZERO
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        assert!(
            x < self.width.get() && y < self.height.get(),
            "pixel ({x}, {y}) is outside a {}x{} bitplane",
            self.width,
            self.height
        );
        let bits = bits_per_word::<W>();
        let idx = self.index(x / bits, y);
        let bit = W::ONE << (x % bits) as u32;
        if value {
            self.data[idx] = self.data[idx] | bit;
        } else {
            self.data[idx] = self.data[idx] & !bit;
        }
    }

    /// Clears every pixel.
    pub fn clear(&mut self) {
        self.data.fill(W::ZERO);
    }

    /// Number of set pixels.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Zeroes the bits past `width` in the last interior word of every row.
    pub(crate) fn clear_tail(&mut self) {
        let tail = self.tail_mask();
        if tail == W::MAX {
            return;
        }

        let last = self.row_words.get() - 1;
        for y in 0..self.height.get() {
            let idx = self.index(last, y);
            self.data[idx] = self.data[idx] & tail;
        }
    }

    /// Whether all guard rows, guard words and unused tail bits are zero.
    #[must_use]
    pub fn padding_is_clear(&self) -> bool {
        let pitch = self.pitch.get();
        let row_words = self.row_words.get();
        let tail = self.tail_mask();

        let top = &self.data[..self.row_offset()];
        let bottom = &self.data[self.row_offset() + self.height.get() * pitch..];
        if top.iter().chain(bottom).any(|&w| w != W::ZERO) {
            return false;
        }

        (0..self.height.get()).all(|y| {
            let start = self.index(0, y);
            let row = &self.data[start..][..pitch];
            row[row_words - 1] & !tail == W::ZERO
                && row[row_words..].iter().all(|&w| w == W::ZERO)
        })
    }

    /// Whether every pixel set in `self` is also set in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.assert_same_shape(other, "is_subset_of");
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| a & !b == W::ZERO)
    }

    /// Renders the plane as one byte per pixel, row-major and unpadded.
    ///
    /// Set pixels become `on` and clear pixels become `off`. Meant for
    /// dumping intermediate masks while debugging.
    #[must_use]
    pub fn to_luma8(&self, on: u8, off: u8) -> Vec<u8> {
        let width = self.width.get();
        let bits = bits_per_word::<W>();
        let mut out = Vec::with_capacity(width * self.height.get());

        for y in 0..self.height.get() {
            let row = self.row(y);
            for x in 0..width {
                let word = row[x / bits];
                let set = (word >> (x % bits) as u32) & W::ONE == W::ONE;
                out.push(if set { on } else { off });
            }
        }

        out
    }
}
