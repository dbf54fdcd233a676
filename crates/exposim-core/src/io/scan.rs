use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::{ExposimError, Result};

/// Position of `path`'s extension in `SUPPORTED_EXTENSIONS`, if recognized.
/// Matching is case-sensitive.
pub fn extension_rank(path: &Path) -> Option<usize> {
    let ext = path.extension()?.to_str()?;
    SUPPORTED_EXTENSIONS.iter().position(|&e| e == ext)
}

/// List image files directly inside `dir` (no recursion).
///
/// Results are grouped by extension in `SUPPORTED_EXTENSIONS` order and
/// sorted by file name within each group. Hidden files are ignored.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExposimError::InputNotDirectory(dir.to_path_buf()));
    }

    let mut found: Vec<(usize, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }
        if let Some(rank) = extension_rank(&path) {
            found.push((rank, path));
        }
    }

    found.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.file_name().cmp(&b.file_name())));
    Ok(found.into_iter().map(|(_, p)| p).collect())
}
