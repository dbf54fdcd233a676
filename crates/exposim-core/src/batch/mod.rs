pub mod config;
mod runner;
mod types;

pub use config::{BatchConfig, EffectSettings};
pub use runner::{process_image, run_batch, run_batch_reported};
pub use types::{BatchSummary, NoOpReporter, ProgressReporter, SkippedImage};
