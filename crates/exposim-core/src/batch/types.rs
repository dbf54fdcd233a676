use std::path::PathBuf;

/// A file the batch did not write, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Clone, Debug, Default)]
pub struct BatchSummary {
    /// Recognized image files found in the input directory.
    pub total: usize,
    /// Images transformed and written.
    pub written: usize,
    /// Files that could not be decoded.
    pub skipped: Vec<SkippedImage>,
    /// Files that were transformed but could not be written.
    pub failed: Vec<SkippedImage>,
    pub output_dir: PathBuf,
}

impl BatchSummary {
    pub fn is_complete(&self) -> bool {
        self.written == self.total
    }
}

/// Thread-safe progress reporting for a batch run.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// The run is starting with `total` images.
    fn begin(&self, _total: usize) {}

    /// `done` images have been handled (written, skipped or failed).
    fn advance(&self, _done: usize) {}

    /// Every image has been handled.
    fn finish(&self) {}
}

/// Reporter that ignores all progress.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
