pub mod clip;
pub mod reference;

pub use clip::{ClipContentType, TestClipConfig, generate_frame};
pub use reference::{assert_frames_match, assert_masks_match, reference_mask, reference_process};
