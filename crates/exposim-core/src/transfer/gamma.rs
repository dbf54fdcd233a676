use crate::buffer::PixelBuffer;
use crate::consts::LUT_SIZE;
use crate::error::{ExposimError, Result};

use super::lut::Lut;
use super::ToneCurve;

/// Build the gamma table: `table[i] = clamp((i / 255)^(1 / gamma) * 255)`.
///
/// gamma > 1.0 lifts midtones, gamma < 1.0 lowers them. The inverse is
/// undefined for gamma <= 0, which is rejected along with NaN and infinity.
pub fn gamma_lut(gamma: f32) -> Result<Lut> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(ExposimError::InvalidGamma(gamma));
    }
    let inv_gamma = 1.0 / f64::from(gamma);
    let max = (LUT_SIZE - 1) as f64;

    let mut table = [0u8; LUT_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        let v = (i as f64 / max).powf(inv_gamma) * max;
        *entry = v.clamp(0.0, max) as u8;
    }
    Ok(Lut::from_table(table))
}

/// Gamma-correct every channel through a lookup table built once per call.
pub fn adjust_gamma(buffer: &PixelBuffer, gamma: f32) -> Result<PixelBuffer> {
    let lut = gamma_lut(gamma)?;
    Ok(lut.apply(buffer))
}
