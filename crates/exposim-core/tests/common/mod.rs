#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use exposim_core::batch::ProgressReporter;
use exposim_core::buffer::PixelBuffer;
use exposim_core::error::{ExposimError, Result};
use exposim_core::io::image_io::{save_image, ImageCodec};

/// Uniform buffer.
pub fn make_buffer(h: usize, w: usize, fill: u8) -> PixelBuffer {
    PixelBuffer::from_elem(h, w, 3, fill)
}

/// 16x16 single-channel buffer holding every value 0..=255 once.
pub fn make_ramp_buffer() -> PixelBuffer {
    let raw: Vec<u8> = (0..=255).collect();
    PixelBuffer::from_raw(16, 16, 1, raw).expect("ramp shape")
}

/// 3-channel gradient with distinct values per channel.
pub fn make_gradient_buffer(h: usize, w: usize) -> PixelBuffer {
    let mut raw = Vec::with_capacity(h * w * 3);
    for row in 0..h {
        for col in 0..w {
            raw.push(((row * 255) / h.max(1)) as u8);
            raw.push(((col * 255) / w.max(1)) as u8);
            raw.push((((row + col) * 127) / (h + w).max(1)) as u8);
        }
    }
    PixelBuffer::from_raw(h, w, 3, raw).expect("gradient shape")
}

/// Save `buffer` into `dir/name` with the real codec.
pub fn write_test_image(dir: &Path, name: &str, buffer: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    save_image(buffer, &path).expect("write test image");
    path
}

/// Codec that never touches file contents.
///
/// Decoding returns a uniform gray buffer unless the file name contains
/// "corrupt". Encoding fails for names containing "readonly" and otherwise
/// records the buffer in memory.
pub struct FakeCodec {
    pub fill: u8,
    pub written: Mutex<HashMap<PathBuf, PixelBuffer>>,
}

impl FakeCodec {
    pub fn new(fill: u8) -> Self {
        Self {
            fill,
            written: Mutex::new(HashMap::new()),
        }
    }

    pub fn written_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .written
            .lock()
            .unwrap()
            .keys()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn name_contains(path: &Path, needle: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.contains(needle))
}

impl ImageCodec for FakeCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        if name_contains(path, "corrupt") {
            return Err(ExposimError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "corrupt image",
            )));
        }
        Ok(PixelBuffer::from_elem(4, 4, 3, self.fill))
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        if name_contains(path, "readonly") {
            return Err(ExposimError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only destination",
            )));
        }
        self.written
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), buffer.clone());
        Ok(())
    }
}

/// Create empty placeholder files; contents are ignored by `FakeCodec`.
pub fn touch_files(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").expect("touch file");
    }
}

/// Reporter that records what it was told.
#[derive(Default)]
pub struct RecordingReporter {
    pub total: AtomicUsize,
    pub advances: AtomicUsize,
    pub last_done: AtomicUsize,
    pub finished: AtomicBool,
}

impl ProgressReporter for RecordingReporter {
    fn begin(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }

    fn advance(&self, done: usize) {
        self.advances.fetch_add(1, Ordering::SeqCst);
        self.last_done.fetch_max(done, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}
