use crate::buffer::PixelBuffer;
use crate::consts::MAX_INTENSITY;

use super::lut::Lut;
use super::ToneCurve;

/// Power-law curve: `out = (in / 255)^exponent * 255`, truncated to u8.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerCurve {
    /// `None` means identity.
    exponent: Option<f32>,
}

impl PowerCurve {
    /// Curve for an exposure factor: exponent is `1 / factor`.
    ///
    /// A factor that is not strictly positive (including NaN) gives the
    /// identity curve instead of an error.
    pub fn from_factor(factor: f32) -> Self {
        let exponent = if factor > 0.0 { Some(1.0 / factor) } else { None };
        Self { exponent }
    }

    pub fn is_identity(&self) -> bool {
        self.exponent.is_none()
    }

    /// Precompute this curve for all 256 inputs.
    pub fn to_lut(&self) -> Lut {
        Lut::from_curve(self)
    }
}

impl ToneCurve for PowerCurve {
    fn map_value(&self, value: u8) -> u8 {
        match self.exponent {
            Some(exponent) => {
                let normalized = f32::from(value) / MAX_INTENSITY;
                // 0^e = 0 and 1^e = 1 for any positive e, so no NaN here.
                let adjusted = normalized.powf(exponent);
                (adjusted * MAX_INTENSITY).clamp(0.0, MAX_INTENSITY) as u8
            }
            None => value,
        }
    }

    fn apply(&self, buffer: &PixelBuffer) -> PixelBuffer {
        if self.is_identity() {
            return buffer.clone();
        }
        buffer.map_values(|v| self.map_value(v))
    }
}

/// Brighten (`factor > 1`) or darken (`0 < factor < 1`) an image with a
/// power-law remap on the normalized [0, 1] domain.
///
/// `factor <= 0` returns an exact copy of the input.
pub fn adjust_exposure(buffer: &PixelBuffer, factor: f32) -> PixelBuffer {
    PowerCurve::from_factor(factor).apply(buffer)
}
