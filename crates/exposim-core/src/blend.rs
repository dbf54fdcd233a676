use ndarray::{Array3, Zip};

use crate::buffer::PixelBuffer;
use crate::consts::{MAX_INTENSITY, PARALLEL_ELEMENT_THRESHOLD};
use crate::error::{ExposimError, Result};

/// Round to nearest (ties to even) and clamp into the u8 range.
#[inline]
fn saturate(v: f32) -> u8 {
    v.round_ties_even().clamp(0.0, MAX_INTENSITY) as u8
}

/// Weighted sum of two buffers: `out = clamp(round(alpha*a + beta*b + bias))`.
///
/// Halfway values round to the even neighbour.
pub fn add_weighted(
    a: &PixelBuffer,
    alpha: f32,
    b: &PixelBuffer,
    beta: f32,
    bias: f32,
) -> Result<PixelBuffer> {
    if a.shape() != b.shape() {
        return Err(ExposimError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let mut out = Array3::<u8>::zeros(a.shape());
    let zip = Zip::from(&mut out).and(&a.data).and(&b.data);
    let blend = |o: &mut u8, &x: &u8, &y: &u8| {
        *o = saturate(alpha * f32::from(x) + beta * f32::from(y) + bias);
    };
    if a.data.len() >= PARALLEL_ELEMENT_THRESHOLD {
        zip.par_for_each(blend);
    } else {
        zip.for_each(blend);
    }
    Ok(PixelBuffer::new(out))
}

/// Multiply every channel by `weight` with a saturating clamp.
///
/// Same result as `add_weighted(buffer, weight, black, 0.0, 0.0)` without
/// allocating the black operand.
pub fn scale(buffer: &PixelBuffer, weight: f32) -> PixelBuffer {
    buffer.map_values(|v| saturate(weight * f32::from(v)))
}
