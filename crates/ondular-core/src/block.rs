//! Stream preparation and per-block processing contracts.
//!
//! A host (audio callback, offline renderer, test harness) describes its
//! audio configuration once with a [`StreamSpec`], then hands the processor
//! one [`BlockContext`] per buffer. The context carries the input and
//! output blocks for the single supported channel plus a bypass flag;
//! multi-channel adaptation (e.g. duplicating mono processing across a
//! stereo pair) is the caller's responsibility.

/// Audio configuration supplied before processing begins and again whenever
/// the host configuration changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamSpec {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Largest block length the host will submit.
    pub max_block_size: usize,
    /// Number of channels the host will submit per block.
    pub num_channels: usize,
}

impl Default for StreamSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            max_block_size: 512,
            num_channels: 1,
        }
    }
}

/// One block of audio to process: an input slice, an output slice of the
/// same length, and the bypass state for this block.
///
/// Input and output lengths being equal is a precondition of processing,
/// not a runtime error — processors assert it.
#[derive(Debug)]
pub struct BlockContext<'a, S = f32> {
    /// Input samples for the supported channel.
    pub input: &'a [S],
    /// Output samples, written by the processor.
    pub output: &'a mut [S],
    /// When set, the processor copies input to output verbatim and touches
    /// no internal state.
    pub bypassed: bool,
}

impl<'a, S> BlockContext<'a, S> {
    /// Convenience constructor for an active (non-bypassed) block.
    pub fn new(input: &'a [S], output: &'a mut [S]) -> Self {
        Self {
            input,
            output,
            bypassed: false,
        }
    }

    /// Number of samples in this block.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// True when the block holds no samples.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}
