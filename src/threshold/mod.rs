mod rust;


use crate::{bitplane::Bitplane, frame::Frame, util::PackWord};

/// Packs a frame into a bitplane, marking every non-black pixel.
///
/// A pixel is set when any of its red, green or blue channels is non-zero.
/// Alpha is ignored, so a fully transparent colored pixel still counts. The
/// whole interior of `dest` is overwritten; its padding is left untouched
/// and therefore stays zero.
///
/// # Panics
/// Panics if `dest` and `src` have different dimensions.
pub fn threshold<W: PackWord>(dest: &mut Bitplane<W>, src: &Frame) {
    assert!(
        dest.width() == src.width() && dest.height() == src.height(),
        "threshold: frame is {}x{} but bitplane is {}x{}",
        src.width(),
        src.height(),
        dest.width(),
        dest.height()
    );

    let pitch = dest.pitch();
    let row_words = dest.row_words();
    rust::threshold(
        dest.words_mut(),
        src.pixels(),
        pitch,
        row_words,
        src.width(),
        src.height(),
    );
}
