use interlace_mask::Frame;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

#[derive(Debug, Clone, Copy)]
pub enum ClipContentType {
    /// Smooth diagonal ramp that goes black in the top-left corner.
    Gradient,
    /// 8x8 black and white checkerboard.
    Checkerboard,
    /// Flat background with a combed block in the middle.
    Combed,
    /// Uniform noise with roughly half the pixels black.
    Noise,
}

#[derive(Debug, Clone, Copy)]
pub struct TestClipConfig {
    pub width: usize,
    pub height: usize,
    pub content_type: ClipContentType,
    pub seed: u64,
}

impl Default for TestClipConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            content_type: ClipContentType::Combed,
            seed: 0,
        }
    }
}

pub fn generate_frame(config: &TestClipConfig) -> Frame {
    let (width, height) = (config.width, config.height);
    let mut rng = Xoshiro128StarStar::seed_from_u64(config.seed);
    let mut frame = Frame::new(width, height).unwrap();

    for y in 0..height {
        for x in 0..width {
            let px = match config.content_type {
                ClipContentType::Gradient => {
                    let v = ((x + y) * 255 / (width + height)) as u8;
                    [v, v / 2, v / 3, 255]
                }
                ClipContentType::Checkerboard => {
                    if (x / 8 + y / 8) % 2 == 0 {
                        [0, 0, 0, 255]
                    } else {
                        [255, 255, 255, 255]
                    }
                }
                ClipContentType::Combed => {
                    let inside = (width / 4..width * 3 / 4).contains(&x)
                        && (height / 4..height * 3 / 4).contains(&y);
                    match (inside, y % 2) {
                        (true, 1) => [0, 0, 0, 255],
                        (true, _) => [220, 180, 90, 255],
                        (false, _) => [60, 60, 60, 255],
                    }
                }
                ClipContentType::Noise => {
                    if rng.random_bool(0.5) {
                        [0, 0, 0, rng.random()]
                    } else {
                        rng.random()
                    }
                }
            };
            frame.set_pixel(x, y, px);
        }
    }
    frame
}
