use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::buffer::PixelBuffer;
use crate::consts::PROGRESS_INTERVAL;
use crate::effects::apply_effect;
use crate::error::{ExposimError, Result};
use crate::io::image_io::ImageCodec;
use crate::io::scan::list_images;
use crate::transfer::{gamma_lut, Lut, ToneCurve};

use super::config::BatchConfig;
use super::types::{BatchSummary, NoOpReporter, ProgressReporter, SkippedImage};

enum Outcome {
    Written,
    Skipped(String),
    WriteFailed(String),
}

/// Apply the configured effect, then the optional gamma step, to one buffer.
pub fn process_image(buffer: &PixelBuffer, config: &BatchConfig) -> Result<PixelBuffer> {
    let lut = config.gamma.map(gamma_lut).transpose()?;
    Ok(transform(buffer, config, lut.as_ref()))
}

fn transform(buffer: &PixelBuffer, config: &BatchConfig, gamma: Option<&Lut>) -> PixelBuffer {
    let processed = apply_effect(buffer, config.effect, config.strength);
    match gamma {
        Some(lut) => lut.apply(&processed),
        None => processed,
    }
}

fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => output_dir.join(name),
        None => output_dir.join(input),
    }
}

fn process_file(
    path: &Path,
    config: &BatchConfig,
    gamma: Option<&Lut>,
    codec: &dyn ImageCodec,
) -> Outcome {
    let buffer = match codec.decode(path) {
        Ok(b) => b,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read image, skipping");
            return Outcome::Skipped(e.to_string());
        }
    };
    debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        channels = buffer.channels(),
        "Decoded image"
    );

    let processed = transform(&buffer, config, gamma);
    let out = output_path(&config.output_dir, path);
    match codec.encode(&processed, &out) {
        Ok(()) => Outcome::Written,
        Err(e) => {
            warn!(path = %out.display(), error = %e, "Could not write image");
            Outcome::WriteFailed(e.to_string())
        }
    }
}

fn log_progress(done: usize, total: usize) {
    if done % PROGRESS_INTERVAL == 0 || done == total {
        info!("Processed {done}/{total} images");
    }
}

/// Transform every recognized image in `config.input_dir` and write the
/// results under `config.output_dir` with the same file names.
///
/// Fails only if the input directory is missing, holds no recognized
/// images, the gamma is invalid, or the output directory cannot be created.
/// Unreadable or unwritable files are recorded in the summary.
pub fn run_batch_reported(
    config: &BatchConfig,
    codec: &dyn ImageCodec,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<BatchSummary> {
    let gamma = config.gamma.map(gamma_lut).transpose()?;

    let paths = list_images(&config.input_dir)?;
    if paths.is_empty() {
        return Err(ExposimError::NoImagesFound(config.input_dir.clone()));
    }
    fs::create_dir_all(&config.output_dir)?;

    let total = paths.len();
    let params = config.effect.params(config.strength);
    info!(
        total,
        effect = %config.effect,
        strength = params.strength,
        exposure_factor = params.exposure_factor,
        weight = params.weight,
        parallel = config.parallel,
        "Starting batch"
    );
    reporter.begin(total);

    let outcomes: Vec<(PathBuf, Outcome)> = if config.parallel {
        let done = AtomicUsize::new(0);
        paths
            .par_iter()
            .map(|path| {
                let outcome = process_file(path, config, gamma.as_ref(), codec);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.advance(n);
                log_progress(n, total);
                (path.clone(), outcome)
            })
            .collect()
    } else {
        paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                let outcome = process_file(&path, config, gamma.as_ref(), codec);
                reporter.advance(i + 1);
                log_progress(i + 1, total);
                (path, outcome)
            })
            .collect()
    };
    reporter.finish();

    let mut summary = BatchSummary {
        total,
        output_dir: config.output_dir.clone(),
        ..Default::default()
    };
    for (path, outcome) in outcomes {
        match outcome {
            Outcome::Written => summary.written += 1,
            Outcome::Skipped(reason) => summary.skipped.push(SkippedImage { path, reason }),
            Outcome::WriteFailed(reason) => summary.failed.push(SkippedImage { path, reason }),
        }
    }
    summary.skipped.sort_by(|a, b| a.path.cmp(&b.path));
    summary.failed.sort_by(|a, b| a.path.cmp(&b.path));

    info!(
        written = summary.written,
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        output = %config.output_dir.display(),
        "Batch complete"
    );
    Ok(summary)
}

/// Run a batch without progress reporting.
pub fn run_batch(config: &BatchConfig, codec: &dyn ImageCodec) -> Result<BatchSummary> {
    run_batch_reported(config, codec, Arc::new(NoOpReporter))
}
