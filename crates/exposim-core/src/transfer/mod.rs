//! Per-channel intensity remapping.
//!
//! Every curve implements [`ToneCurve`], so the direct power-law
//! computation and its precomputed [`Lut`] form are interchangeable.

pub mod exposure;
pub mod gamma;
pub mod lut;

use crate::buffer::PixelBuffer;

pub use exposure::{adjust_exposure, PowerCurve};
pub use gamma::{adjust_gamma, gamma_lut};
pub use lut::Lut;

/// A mapping from one 8-bit channel value to another.
pub trait ToneCurve: Send + Sync {
    fn map_value(&self, value: u8) -> u8;

    /// Remap every channel of every pixel.
    fn apply(&self, buffer: &PixelBuffer) -> PixelBuffer {
        buffer.map_values(|v| self.map_value(v))
    }
}
