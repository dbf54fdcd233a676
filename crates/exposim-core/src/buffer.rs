use ndarray::Array3;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, PARALLEL_ELEMENT_THRESHOLD};
use crate::error::{ExposimError, Result};

/// A decoded 8-bit image.
///
/// Shape is `(height, width, channels)`. Channel order is whatever the
/// decoder produced; every transform in this crate works per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub data: Array3<u8>,
}

impl PixelBuffer {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Buffer with every channel of every pixel set to `value`.
    pub fn from_elem(height: usize, width: usize, channels: usize, value: u8) -> Self {
        Self::new(Array3::from_elem((height, width, channels), value))
    }

    /// Build from interleaved row-major bytes.
    pub fn from_raw(height: usize, width: usize, channels: usize, raw: Vec<u8>) -> Result<Self> {
        let len = raw.len();
        Array3::from_shape_vec((height, width, channels), raw)
            .map(Self::new)
            .map_err(|_| ExposimError::InvalidBuffer {
                len,
                height,
                width,
                channels,
            })
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// `(height, width, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Interleaved row-major bytes, as image encoders expect them.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Apply `f` to every element, producing a new buffer of the same shape.
    ///
    /// Large buffers are mapped on the Rayon pool.
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8 + Sync + Send,
    {
        let mut data = self.data.clone();
        if data.len() >= PARALLEL_ELEMENT_THRESHOLD {
            data.par_mapv_inplace(f);
        } else {
            data.mapv_inplace(f);
        }
        Self::new(data)
    }

    /// Mean of all channel values, in [0, 255]. Zero for an empty buffer.
    pub fn mean_intensity(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.data.iter().map(|&v| u64::from(v)).sum();
        sum as f64 / self.data.len() as f64
    }

    /// Mean BT.601 luminance for 3-channel buffers (RGB order assumed).
    /// Other channel counts fall back to `mean_intensity`.
    pub fn mean_luminance(&self) -> f64 {
        let (h, w, c) = self.shape();
        if c != 3 || self.is_empty() {
            return self.mean_intensity();
        }
        let mut total = 0.0;
        for px in self.data.rows() {
            total += LUMINANCE_R * f64::from(px[0])
                + LUMINANCE_G * f64::from(px[1])
                + LUMINANCE_B * f64::from(px[2]);
        }
        total / (h * w) as f64
    }
}
