//! Classic flanger effect with an LFO-swept fractional delay.
//!
//! A flanger mixes the input with a short, continuously modulated delayed
//! copy of itself, producing a comb filter whose notches sweep through the
//! spectrum. This implementation uses a single delay line carrying both
//! paths:
//!
//! ```text
//! x ──┬──────────────(+)── xh ──· blend ────────(+)── y
//!     │               ▲        │                 ▲
//!     │   feedback ·──┘        ▼                 │
//!     │        pop(middle)  push(xh)   feedforward · pop(swept)
//!     │               ▲        │                 ▲
//!     │               └── delay line ────────────┘
//! ```
//!
//! The feedback path reads at a fixed delay (half the sweep range); the
//! feedforward path reads at the LFO-swept delay between 0 and ~2 ms. The
//! feedback-mixed value `xh` — not the output — is what enters the line.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::sync::Arc;

use libm::ceilf;
use ondular_core::{
    AtomicF32, BlockContext, FractionalDelayLine, Sample, SineLfo, StreamSpec, flush_denormal,
};

/// Shared flanger configuration.
///
/// Owned jointly by the processor and an external controller through an
/// [`Arc`]. The audio thread reads it once per processed block with relaxed
/// atomics; a concurrent write from the owner may be observed one block
/// late, which is benign — there is no torn state to observe.
#[derive(Debug, Clone)]
pub struct FlangerParams {
    /// Modulation rate of the delay sweep in Hz.
    pub lfo_frequency_hz: AtomicF32,
}

impl FlangerParams {
    /// Default modulation rate in Hz.
    pub const DEFAULT_LFO_FREQUENCY_HZ: f32 = 0.1;

    /// Creates parameters with the given modulation rate.
    pub fn new(lfo_frequency_hz: f32) -> Self {
        Self {
            lfo_frequency_hz: AtomicF32::new(lfo_frequency_hz),
        }
    }
}

impl Default for FlangerParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LFO_FREQUENCY_HZ)
    }
}

/// Flanger processor for a single audio channel.
///
/// Call [`prepare`](Self::prepare) with the host's [`StreamSpec`] before
/// processing and again whenever the audio configuration changes; then feed
/// one [`BlockContext`] per buffer to [`process`](Self::process). The
/// per-sample path performs no allocation, takes no locks and does no IO.
///
/// # Example
///
/// ```rust
/// use ondular_core::{BlockContext, StreamSpec};
/// use ondular_effects::Flanger;
///
/// let mut flanger = Flanger::<f32>::new();
/// flanger.prepare(&StreamSpec {
///     sample_rate: 44100.0,
///     max_block_size: 441,
///     num_channels: 1,
/// });
///
/// let input = [0.5f32; 441];
/// let mut output = [0.0f32; 441];
/// flanger.process(&mut BlockContext::new(&input, &mut output));
/// ```
#[derive(Debug, Clone)]
pub struct Flanger<S = f32> {
    /// Gain of the swept feedforward tap.
    feedforward: S,
    /// Gain of the fixed-delay feedback tap.
    feedback: S,
    /// Gain of the feedback-mixed direct signal.
    blend: S,
    delay_line: FractionalDelayLine<S>,
    lfo: SineLfo<S>,
    /// Sweep range in samples, ~2 ms at the prepared rate.
    max_delay: S,
    /// Fixed feedback-path delay, half the sweep range.
    middle_delay: S,
    params: Arc<FlangerParams>,
}

impl<S: Sample> Flanger<S> {
    /// Sweep range of the modulated delay in seconds.
    const MAX_DELAY_SECONDS: f32 = 0.002;
    /// Default mixing gain for all three paths.
    const DEFAULT_GAIN: f32 = 0.7;
    /// The core processes exactly one channel.
    const SUPPORTED_CHANNELS: usize = 1;

    /// Creates an unprepared flanger with its own parameter object.
    pub fn new() -> Self {
        Self::with_params(Arc::new(FlangerParams::default()))
    }

    /// Creates an unprepared flanger sharing `params` with its owner.
    pub fn with_params(params: Arc<FlangerParams>) -> Self {
        Self {
            feedforward: S::from_f32(Self::DEFAULT_GAIN),
            feedback: S::from_f32(Self::DEFAULT_GAIN),
            blend: S::from_f32(Self::DEFAULT_GAIN),
            delay_line: FractionalDelayLine::new(1),
            lfo: SineLfo::new(48000.0, FlangerParams::DEFAULT_LFO_FREQUENCY_HZ),
            max_delay: S::ZERO,
            middle_delay: S::ZERO,
            params,
        }
    }

    /// Configures the processor for the host's audio setup.
    ///
    /// Derives the sweep range from the sample rate (2 ms rounded up to
    /// whole samples), sizes the delay line, restores default parameter
    /// values, and clears all internal state.
    ///
    /// # Panics
    ///
    /// Panics if the spec announces more than one channel; multi-channel
    /// adaptation belongs to the caller.
    pub fn prepare(&mut self, spec: &StreamSpec) {
        assert_eq!(
            spec.num_channels,
            Self::SUPPORTED_CHANNELS,
            "flanger processes exactly one channel"
        );

        let max_delay_samples = ceilf(spec.sample_rate * Self::MAX_DELAY_SECONDS);
        self.max_delay = S::from_f32(max_delay_samples);
        self.middle_delay = self.max_delay * S::HALF;

        // Deepest read at full modulation is the interpolation neighbour of
        // the max_delay tap.
        self.delay_line = FractionalDelayLine::new(max_delay_samples as usize + 2);
        self.lfo.prepare(spec.sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = spec.sample_rate,
            max_delay_samples,
            "flanger prepared"
        );

        self.set_lfo_frequency(FlangerParams::DEFAULT_LFO_FREQUENCY_HZ, true);
        self.reset();
    }

    /// Processes one block.
    ///
    /// A bypassed block is copied to the output verbatim with no state
    /// mutation. An active block reads the shared parameters once, then
    /// runs the per-sample algorithm over the block.
    pub fn process(&mut self, ctx: &mut BlockContext<'_, S>) {
        debug_assert_eq!(
            ctx.input.len(),
            ctx.output.len(),
            "input and output blocks must have the same length"
        );

        if ctx.bypassed {
            ctx.output.copy_from_slice(ctx.input);
            return;
        }

        self.set_lfo_frequency(self.params.lfo_frequency_hz.load(), false);

        for (inp, out) in ctx.input.iter().zip(ctx.output.iter_mut()) {
            *out = self.process_sample(*inp);
        }
    }

    /// Processes a single sample through the flanger.
    #[inline]
    pub fn process_sample(&mut self, input: S) -> S {
        let xh = input + self.feedback * self.delay_line.pop_sample(self.middle_delay);

        // LFO output is in [-1, 1]; map to [0, 1] and scale into the sweep range
        let unipolar = (self.lfo.advance() + S::ONE) * S::HALF;
        let current_delay = unipolar * self.max_delay;

        let output = self.blend * xh + self.feedforward * self.delay_line.pop_sample(current_delay);

        self.delay_line.push_sample(flush_denormal(xh));

        output
    }

    /// Clears the delay history and modulation phase without touching the
    /// prepared configuration.
    pub fn reset(&mut self) {
        self.delay_line.reset();
        self.lfo.reset();
    }

    /// Shared handle to this processor's parameters.
    pub fn params(&self) -> Arc<FlangerParams> {
        Arc::clone(&self.params)
    }

    /// Currently requested modulation rate in Hz.
    pub fn lfo_frequency(&self) -> f32 {
        self.lfo.frequency()
    }

    /// Sweep range of the modulated delay in samples.
    pub fn max_delay(&self) -> S {
        self.max_delay
    }

    /// Fixed feedback-path delay in samples.
    pub fn middle_delay(&self) -> S {
        self.middle_delay
    }

    /// Forwards a frequency change to the LFO unless it is a no-op.
    fn set_lfo_frequency(&mut self, freq_hz: f32, force: bool) {
        if freq_hz != self.lfo.frequency() {
            self.lfo.set_frequency(freq_hz, force);
        }
    }
}

impl<S: Sample> Default for Flanger<S> {
    fn default() -> Self {
        Self::new()
    }
}
