mod rust;


use crate::{
    bitplane::Bitplane,
    frame::Frame,
    params::{CompositeMode, Strength},
    util::PackWord,
};

fn assert_mask_fits<W: PackWord>(frame: &Frame, mask: &Bitplane<W>) {
    assert!(
        frame.width() == mask.width() && frame.height() == mask.height(),
        "composite: frame is {}x{} but mask is {}x{}",
        frame.width(),
        frame.height(),
        mask.width(),
        mask.height()
    );
}

/// Writes `src` into `dest`, blending every pixel selected by `mask`.
///
/// Unmasked pixels are copied unchanged. Masked pixels are either scaled by
/// `strength` ([`CompositeMode::Attenuate`]) or ORed with the pixel above
/// them ([`CompositeMode::LineMerge`], which leaves row 0 as is). To blend a
/// frame onto itself use [`composite_in_place`].
///
/// # Panics
/// Panics if `dest`, `src` and `mask` do not all have the same dimensions.
pub fn composite<W: PackWord>(
    dest: &mut Frame,
    src: &Frame,
    mask: &Bitplane<W>,
    mode: CompositeMode,
    strength: Strength,
) {
    assert_mask_fits(src, mask);
    assert!(
        dest.same_shape(src),
        "composite: destination frame is {}x{} but source is {}x{}",
        dest.width(),
        dest.height(),
        src.width(),
        src.height()
    );

    let (width, height) = (src.width(), src.height());
    match mode {
        CompositeMode::Attenuate => rust::attenuate(
            dest.pixels_mut(),
            src.pixels(),
            mask.words(),
            mask.pitch(),
            width,
            height,
            strength,
        ),
        CompositeMode::LineMerge => rust::line_merge(
            dest.pixels_mut(),
            src.pixels(),
            mask.words(),
            mask.pitch(),
            width,
            height,
        ),
    }
}

/// [`composite`] with the source and destination being the same frame.
///
/// # Panics
/// Panics if `frame` and `mask` have different dimensions.
pub fn composite_in_place<W: PackWord>(
    frame: &mut Frame,
    mask: &Bitplane<W>,
    mode: CompositeMode,
    strength: Strength,
) {
    assert_mask_fits(frame, mask);

    let (width, height) = (frame.width(), frame.height());
    match mode {
        CompositeMode::Attenuate => rust::attenuate_in_place(
            frame.pixels_mut(),
            mask.words(),
            mask.pitch(),
            width,
            height,
            strength,
        ),
        CompositeMode::LineMerge => rust::line_merge_in_place(
            frame.pixels_mut(),
            mask.words(),
            mask.pitch(),
            width,
            height,
        ),
    }
}
