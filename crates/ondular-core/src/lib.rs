//! Ondular Core - DSP primitives for modulated delay effects
//!
//! Foundational building blocks for real-time audio processing with zero
//! allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Delay
//!
//! - [`FractionalDelayLine`] - Circular buffer with sub-sample interpolated
//!   reads, the heart of swept comb-filter effects
//!
//! ## Modulation
//!
//! - [`SineLfo`] - Sinusoidal low-frequency oscillator with smoothed
//!   frequency changes
//!
//! ## Host Contracts
//!
//! - [`StreamSpec`] - Audio configuration supplied at prepare time
//! - [`BlockContext`] - Per-buffer input/output/bypass bundle
//!
//! ## Shared Parameters
//!
//! - [`AtomicF32`] - Lock-free f32 storage for cross-thread configuration
//!
//! ## Precision
//!
//! - [`Sample`] - Generic sample type, implemented for `f32` (default) and
//!   `f64`
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! ondular-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocation, no locks, no IO in the sample path
//! - **`libm` math**: the same code path with and without `std`
//! - **Defensive reads**: interpolation taps are always clamped in range,
//!   so floating-point drift in a delay value can never read out of bounds

#![cfg_attr(not(feature = "std"), no_std)]

pub mod block;
pub mod delay;
pub mod lfo;
pub mod math;
pub mod param;
pub mod sample;

// Re-export main types at crate root
pub use block::{BlockContext, StreamSpec};
pub use delay::FractionalDelayLine;
pub use lfo::SineLfo;
pub use math::flush_denormal;
pub use param::AtomicF32;
pub use sample::Sample;
