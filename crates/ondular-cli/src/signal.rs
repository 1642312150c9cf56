//! Deterministic test signal generators.

use std::f32::consts::{FRAC_2_PI, TAU};

/// Band-limited sawtooth ramping down from +amplitude, additively
/// synthesized up to the Nyquist frequency so it carries no aliasing.
pub fn saw_ramp_down(freq_hz: f32, sample_rate: f32, duration_secs: f32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    let harmonics = (sample_rate / 2.0 / freq_hz) as usize;

    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            let mut acc = 0.0f32;
            for k in 1..=harmonics {
                let k = k as f32;
                acc += (TAU * k * freq_hz * t).sin() / k;
            }
            amplitude * FRAC_2_PI * acc
        })
        .collect()
}

/// Pure sine tone.
pub fn tone(freq_hz: f32, sample_rate: f32, duration_secs: f32, amplitude: f32) -> Vec<f32> {
    let num_samples = (duration_secs * sample_rate) as usize;
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate;
            amplitude * (TAU * freq_hz * t).sin()
        })
        .collect()
}
