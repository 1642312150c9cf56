//! Ondular Effects - Audio effect implementations
//!
//! Effects built on the ondular-core primitives:
//!
//! - [`Flanger`] - Classic single-channel flanger with an LFO-swept
//!   fractional delay and a fixed-delay feedback path
//!
//! ## Example
//!
//! ```rust
//! use ondular_core::{BlockContext, StreamSpec};
//! use ondular_effects::{Flanger, FlangerParams};
//! use std::sync::Arc;
//!
//! let params = Arc::new(FlangerParams::new(0.1));
//! let mut flanger = Flanger::<f32>::with_params(Arc::clone(&params));
//! flanger.prepare(&StreamSpec::default());
//!
//! // The owner keeps its handle and may retune the sweep at any time
//! params.lfo_frequency_hz.store(0.25);
//!
//! let input = vec![0.0f32; 512];
//! let mut output = vec![0.0f32; 512];
//! flanger.process(&mut BlockContext::new(&input, &mut output));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod flanger;

// Re-export main types at crate root
pub use flanger::{Flanger, FlangerParams};
