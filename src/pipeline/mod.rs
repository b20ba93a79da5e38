
use anyhow::{Result, bail};
use tracing::{debug, trace};

use crate::{
    bitplane::Bitplane,
    composite::{composite, composite_in_place},
    diff::temporal_diff,
    frame::Frame,
    morph::refine,
    params::{CompositeMode, DEFAULT_PASSES, RefineOrder, Strength},
    threshold::threshold,
    util::PackWord,
};

/// Tunables for one [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub strength: Strength,
    /// Rounds of dilation and of erosion applied to the raw edge mask.
    pub passes: usize,
    pub mode: CompositeMode,
    pub order: RefineOrder,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strength: Strength::default(),
            passes: DEFAULT_PASSES,
            mode: CompositeMode::default(),
            order: RefineOrder::default(),
        }
    }
}

impl PipelineConfig {
    /// Builds a config from optional integer arguments, filling in defaults.
    pub fn new(
        strength: Option<i64>,
        passes: Option<i64>,
        mode: Option<i64>,
        order: Option<i64>,
    ) -> Result<Self> {
        let strength = strength.map(Strength::try_from).transpose()?.unwrap_or_default();
        let passes = match passes {
            None => DEFAULT_PASSES,
            Some(p) if p < 0 => bail!("Invalid value for 'passes', must be 0 or greater, got {p}."),
            Some(p) => usize::try_from(p)?,
        };
        let mode = mode.map(CompositeMode::try_from).transpose()?.unwrap_or_default();
        let order = order.map(RefineOrder::try_from).transpose()?.unwrap_or_default();

        Ok(Self {
            strength,
            passes,
            mode,
            order,
        })
    }
}

/// Detects the interlaced region of a frame and blends it.
///
/// A pipeline is sized for one frame geometry and owns the two bitplanes the
/// stages ping-pong between, so it can be reused for every frame of a clip
/// without allocating. Frames processed concurrently need a pipeline each.
#[derive(Debug, Clone)]
pub struct Pipeline<W: PackWord = u64> {
    config: PipelineConfig,
    mask: Bitplane<W>,
    scratch: Bitplane<W>,
}

impl<W: PackWord> Pipeline<W> {
    /// Allocates the scratch planes for `width` x `height` frames.
    ///
    /// Fails before allocating anything if the dimensions are malformed.
    pub fn new(width: usize, height: usize, config: PipelineConfig) -> Result<Self> {
        let mask = Bitplane::new(width, height)?;
        let scratch = Bitplane::new(width, height)?;

        debug!(
            width,
            height,
            pitch = mask.pitch().get(),
            word_bits = W::BITS,
            strength = %config.strength,
            passes = config.passes,
            mode = ?config.mode,
            order = ?config.order,
            "created deinterlace pipeline"
        );

        Ok(Self {
            config,
            mask,
            scratch,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The mask computed by the most recent call to [`Self::detect`] or one
    /// of the `process` methods.
    #[must_use]
    pub fn mask(&self) -> &Bitplane<W> {
        &self.mask
    }

    fn assert_fits(&self, frame: &Frame) {
        assert!(
            frame.width() == self.mask.width() && frame.height() == self.mask.height(),
            "pipeline was built for {}x{} frames, got {}x{}",
            self.mask.width(),
            self.mask.height(),
            frame.width(),
            frame.height()
        );
    }

    /// Builds the interlace mask for `frame` without touching any pixels.
    ///
    /// Threshold into the scratch plane, XOR each row with the one above
    /// into the mask plane, then refine between the two.
    ///
    /// # Panics
    /// Panics if `frame` does not match the pipeline's dimensions.
    pub fn detect(&mut self, frame: &Frame) -> &Bitplane<W> {
        self.assert_fits(frame);

        threshold(&mut self.scratch, frame);
        trace!(set = self.scratch.count_ones(), "thresholded frame");

        temporal_diff(&mut self.mask, &self.scratch);
        trace!(set = self.mask.count_ones(), "differenced rows");

        refine(
            &mut self.mask,
            &mut self.scratch,
            self.config.passes,
            self.config.order,
        );
        trace!(set = self.mask.count_ones(), "refined mask");

        &self.mask
    }

    /// Deinterlaces `frame` into `dest`, reusing its allocation.
    ///
    /// # Panics
    /// Panics if either frame does not match the pipeline's dimensions.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn process_into(&mut self, frame: &Frame, dest: &mut Frame) {
        self.detect(frame);
        composite(
            dest,
            frame,
            &self.mask,
            self.config.mode,
            self.config.strength,
        );
    }

    /// Deinterlaces `frame` in place.
    ///
    /// # Panics
    /// Panics if `frame` does not match the pipeline's dimensions.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn process_in_place(&mut self, frame: &mut Frame) {
        self.detect(frame);
        composite_in_place(frame, &self.mask, self.config.mode, self.config.strength);
    }

    /// Deinterlaces `frame` into a newly allocated copy, inside the span of
    /// [`Self::process_in_place`].
    ///
    /// # Panics
    /// Panics if `frame` does not match the pipeline's dimensions.
    #[must_use]
    pub fn process(&mut self, frame: &Frame) -> Frame {
        let mut out = frame.clone();
        self.process_in_place(&mut out);
        out
    }
}

/// One-shot helper: builds a 64-bit pipeline for `frame` and runs it once.
pub fn deinterlace(frame: &Frame, config: PipelineConfig) -> Result<Frame> {
    let mut pipeline =
        Pipeline::<u64>::new(frame.width().get(), frame.height().get(), config)?;
    Ok(pipeline.process(frame))
}
