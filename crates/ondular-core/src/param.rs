//! Lock-free parameter storage for values shared with other threads.
//!
//! Effect configuration may be owned jointly by the audio processor and an
//! external controller (UI, automation). The audio thread must never block,
//! so shared values are stored as atomic `u32` (f32 bit-cast) with relaxed
//! ordering: a reader may observe a slightly stale value, never a torn one.
//! That staleness is a documented benign race, not a bug — parameter reads
//! happen once per block and converge on the next one.

use core::sync::atomic::{AtomicU32, Ordering};

/// An `f32` readable and writable from multiple threads without locking.
///
/// # Example
///
/// ```rust
/// use ondular_core::AtomicF32;
///
/// let value = AtomicF32::new(0.1);
/// value.store(2.5);
/// assert_eq!(value.load(), 2.5);
/// ```
#[derive(Debug)]
pub struct AtomicF32 {
    bits: AtomicU32,
}

impl AtomicF32 {
    /// Creates storage holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            bits: AtomicU32::new(value.to_bits()),
        }
    }

    /// Reads the current value (relaxed).
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Writes a new value (relaxed).
    #[inline]
    pub fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Clone for AtomicF32 {
    fn clone(&self) -> Self {
        Self::new(self.load())
    }
}
