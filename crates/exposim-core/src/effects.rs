use serde::{Deserialize, Serialize};

use crate::blend::scale;
use crate::buffer::PixelBuffer;
use crate::consts::{
    DARK_FACTOR_SCALE, DARK_WEIGHT_SCALE, OVEREXPOSE_FACTOR_SCALE, OVEREXPOSE_WEIGHT_SCALE,
    STRENGTH_MAX, STRENGTH_MIN,
};
use crate::transfer::adjust_exposure;

/// Which exposure defect to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Underexposure.
    Dark,
    /// Overexposure.
    #[serde(rename = "overexpose", alias = "overexposed")]
    Overexposed,
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Overexposed => write!(f, "overexpose"),
        }
    }
}

/// Parameters an effect derives from its strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectParams {
    /// Strength after clamping.
    pub strength: f32,
    /// Exposure factor fed to `adjust_exposure`.
    pub exposure_factor: f32,
    /// Multiplier applied after the exposure curve.
    pub weight: f32,
}

impl Effect {
    pub fn params(self, strength: f32) -> EffectParams {
        let strength = clamp_strength(strength);
        let (exposure_factor, weight) = match self {
            Self::Dark => (
                1.0 - strength * DARK_FACTOR_SCALE,
                1.0 - strength * DARK_WEIGHT_SCALE,
            ),
            Self::Overexposed => (
                1.0 + strength * OVEREXPOSE_FACTOR_SCALE,
                1.0 + strength * OVEREXPOSE_WEIGHT_SCALE,
            ),
        };
        EffectParams {
            strength,
            exposure_factor,
            weight,
        }
    }

    pub fn apply(self, buffer: &PixelBuffer, strength: f32) -> PixelBuffer {
        let params = self.params(strength);
        let exposed = adjust_exposure(buffer, params.exposure_factor);
        scale(&exposed, params.weight)
    }
}

/// Clamp a user-supplied strength into `[0.1, 1.0]`. NaN maps to 0.1.
pub fn clamp_strength(strength: f32) -> f32 {
    if strength.is_nan() {
        return STRENGTH_MIN;
    }
    strength.clamp(STRENGTH_MIN, STRENGTH_MAX)
}

/// Simulate underexposure. Higher strength is darker; 0 and pure black stay fixed.
pub fn create_dark_effect(buffer: &PixelBuffer, strength: f32) -> PixelBuffer {
    Effect::Dark.apply(buffer, strength)
}

/// Simulate overexposure. Higher strength is brighter; values saturate at 255.
pub fn create_overexposure_effect(buffer: &PixelBuffer, strength: f32) -> PixelBuffer {
    Effect::Overexposed.apply(buffer, strength)
}

pub fn apply_effect(buffer: &PixelBuffer, effect: Effect, strength: f32) -> PixelBuffer {
    effect.apply(buffer, strength)
}
