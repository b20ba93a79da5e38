//! A per-pixel implementation of the pipeline on plain `bool` grids, used as
//! the ground truth for the packed kernels.

use anyhow::{Result, ensure};
use interlace_mask::{
    Bitplane,
    CompositeMode,
    Frame,
    PackWord,
    PipelineConfig,
    RefineOrder,
};

struct Grid {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Grid {
    fn at(&self, x: isize, y: isize, outside: bool) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return outside;
        }
        self.bits[y as usize * self.width + x as usize]
    }

    fn map(&self, f: impl Fn(isize, isize) -> bool) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len());
        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                bits.push(f(x, y));
            }
        }
        Self {
            width: self.width,
            height: self.height,
            bits,
        }
    }

    fn dilate(&self, dx: isize, dy: isize) -> Self {
        self.map(|x, y| {
            self.at(x - dx, y - dy, false) || self.at(x, y, false) || self.at(x + dx, y + dy, false)
        })
    }

    fn erode(&self, dx: isize, dy: isize) -> Self {
        self.map(|x, y| {
            self.at(x - dx, y - dy, true) && self.at(x, y, true) && self.at(x + dx, y + dy, true)
        })
    }
}

pub fn reference_mask(frame: &Frame, config: &PipelineConfig) -> Vec<bool> {
    let (width, height) = (frame.width().get(), frame.height().get());
    let thresholded = Grid {
        width,
        height,
        bits: frame
            .pixels()
            .iter()
            .map(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
            .collect(),
    };
    let mut mask = thresholded.map(|x, y| thresholded.at(x, y, false) ^ thresholded.at(x, y - 1, false));

    let dilate_first = config.order == RefineOrder::DilateFirst;
    for dilating in [dilate_first, !dilate_first] {
        for _ in 0..config.passes {
            mask = if dilating {
                mask.dilate(1, 0).dilate(0, 1)
            } else {
                mask.erode(1, 0).erode(0, 1)
            };
        }
    }
    mask.bits
}

pub fn reference_process(frame: &Frame, config: &PipelineConfig) -> Frame {
    let mask = reference_mask(frame, config);
    let width = frame.width().get();
    let mut out = frame.clone();

    for (i, &masked) in mask.iter().enumerate() {
        if !masked {
            continue;
        }
        let (x, y) = (i % width, i / width);
        let px = frame.pixel(x, y);
        let blended = match config.mode {
            CompositeMode::Attenuate => [
                config.strength.apply(px[0]),
                config.strength.apply(px[1]),
                config.strength.apply(px[2]),
                px[3],
            ],
            CompositeMode::LineMerge if y == 0 => px,
            CompositeMode::LineMerge => {
                let above = frame.pixel(x, y - 1);
                [px[0] | above[0], px[1] | above[1], px[2] | above[2], px[3] | above[3]]
            }
        };
        out.set_pixel(x, y, blended);
    }
    out
}

pub fn assert_masks_match<W: PackWord>(
    expected: &[bool],
    actual: &Bitplane<W>,
    context: &str,
) -> Result<()> {
    let width = actual.width().get();
    ensure!(
        expected.len() == width * actual.height().get(),
        "{context}: mask size mismatch"
    );
    for (i, &bit) in expected.iter().enumerate() {
        let (x, y) = (i % width, i / width);
        ensure!(
            actual.get(x, y) == bit,
            "{context}: mask differs at ({x}, {y}), expected {bit}"
        );
    }
    ensure!(actual.padding_is_clear(), "{context}: padding bits are set");
    Ok(())
}

pub fn assert_frames_match(expected: &Frame, actual: &Frame, context: &str) -> Result<()> {
    ensure!(
        expected.same_shape(actual),
        "{context}: frame size mismatch"
    );
    let width = expected.width().get();
    for (i, (e, a)) in expected.pixels().iter().zip(actual.pixels()).enumerate() {
        ensure!(
            e == a,
            "{context}: pixel ({}, {}) is {a:?}, expected {e:?}",
            i % width,
            i / width
        );
    }
    Ok(())
}
