//! Sinusoidal low-frequency oscillator for delay modulation.
//!
//! Produces a bounded periodic waveform in `[-1, 1]` by phase accumulation.
//! Only the sine shape is provided; the flanger contract needs nothing
//! else, so there is no waveform enum and no dynamic dispatch.

use libm::expf;

use crate::sample::Sample;

/// Smoothing time constant for non-forced frequency changes.
const FREQUENCY_SMOOTHING_MS: f32 = 50.0;

/// Sine LFO with phase accumulation and smoothed frequency changes.
///
/// Frequency updates come in two flavors: forced updates take effect on the
/// next sample, while regular updates glide the phase increment through a
/// one-pole smoother so an audible modulation rate never jumps.
///
/// # Example
///
/// ```rust
/// use ondular_core::SineLfo;
///
/// let mut lfo = SineLfo::<f32>::new(48000.0, 0.1);
/// let value = lfo.advance();
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct SineLfo<S = f32> {
    /// Current phase position in `[0, 1)`.
    phase: S,
    /// Smoothed phase increment per sample.
    phase_inc: S,
    /// Increment corresponding to the requested frequency.
    target_inc: S,
    /// One-pole coefficient for the increment glide.
    smooth_coeff: S,
    /// Sample rate in Hz.
    sample_rate: f32,
}

impl<S: Sample> SineLfo<S> {
    /// Creates an LFO running at `freq_hz` for the given sample rate.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        let inc = S::from_f32(freq_hz / sample_rate);
        Self {
            phase: S::ZERO,
            phase_inc: inc,
            target_inc: inc,
            smooth_coeff: smoothing_coeff(sample_rate),
            sample_rate,
        }
    }

    /// Produces the next waveform sample and advances the phase by one step.
    ///
    /// The first call after a reset returns `sin(0) = 0`.
    #[inline]
    pub fn advance(&mut self) -> S {
        let value = (self.phase * S::TAU).sin();

        self.phase_inc = self.phase_inc + self.smooth_coeff * (self.target_inc - self.phase_inc);
        self.phase = self.phase + self.phase_inc;
        if self.phase >= S::ONE {
            self.phase = self.phase - S::ONE;
        }

        value
    }

    /// Sets the oscillation frequency in Hz.
    ///
    /// With `force` the new rate applies on the next sample; otherwise the
    /// phase increment glides to it over roughly 50 ms.
    pub fn set_frequency(&mut self, freq_hz: f32, force: bool) {
        self.target_inc = S::from_f32(freq_hz / self.sample_rate);
        if force {
            self.phase_inc = self.target_inc;
        }
    }

    /// The most recently requested frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.target_inc.to_f32() * self.sample_rate
    }

    /// Reconfigures for a new sample rate, keeping the requested frequency,
    /// and resets the phase.
    pub fn prepare(&mut self, sample_rate: f32) {
        let freq = self.frequency();
        self.sample_rate = sample_rate;
        self.smooth_coeff = smoothing_coeff(sample_rate);
        self.set_frequency(freq, true);
        self.reset();
    }

    /// Rewinds the phase to 0 and snaps any in-flight frequency glide.
    pub fn reset(&mut self) {
        self.phase = S::ZERO;
        self.phase_inc = self.target_inc;
    }
}

impl<S: Sample> Default for SineLfo<S> {
    fn default() -> Self {
        Self::new(48000.0, 1.0)
    }
}

/// One-pole coefficient reaching ~63% of a frequency step per time constant.
fn smoothing_coeff<S: Sample>(sample_rate: f32) -> S {
    let samples = (FREQUENCY_SMOOTHING_MS / 1000.0) * sample_rate;
    S::from_f32(1.0 - expf(-1.0 / samples))
}
