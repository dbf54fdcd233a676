use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_STRENGTH;
use crate::effects::Effect;

fn default_strength() -> f32 {
    DEFAULT_STRENGTH
}

/// Everything a batch run needs. Passed explicitly to `run_batch`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub effect: Effect,
    /// Clamped to [0.1, 1.0] when applied.
    #[serde(default = "default_strength")]
    pub strength: f32,
    /// Optional gamma correction applied after the effect.
    #[serde(default)]
    pub gamma: Option<f32>,
    /// Process images on the Rayon pool instead of one at a time.
    #[serde(default)]
    pub parallel: bool,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, effect: Effect) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            effect,
            strength: DEFAULT_STRENGTH,
            gamma: None,
            parallel: false,
        }
    }
}

/// Effect settings that can be stored in a TOML file and reused across runs.
/// Unset fields fall back to command-line values or defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    pub effect: Option<Effect>,
    pub strength: Option<f32>,
    pub gamma: Option<f32>,
}
