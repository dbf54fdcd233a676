use anyhow::Result;
use exposim_core::batch::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter that drives a terminal progress bar.
pub struct BarReporter {
    pb: ProgressBar,
}

impl BarReporter {
    pub fn new() -> Result<Self> {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Processing images");
        Ok(Self { pb })
    }
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total: usize) {
        self.pb.set_length(total as u64);
        self.pb.set_position(0);
    }

    fn advance(&self, done: usize) {
        self.pb.set_position(done as u64);
    }

    fn finish(&self) {
        self.pb.finish_with_message("Done");
    }
}
