use std::path::{Path, PathBuf};

use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;
use crate::video::domain::frame_source::FrameSource;

/// Reads a directory of still images as a frame stream, in lexicographic
/// filename order. Non-image files are ignored.
pub struct ImageSequenceSource {
    paths: Vec<PathBuf>,
    cursor: usize,
}

impl ImageSequenceSource {
    pub fn new(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_image_file(path))
            .collect();
        paths.sort();
        if paths.is_empty() {
            return Err(format!("no image files found in {}", dir.display()).into());
        }
        Ok(Self { paths, cursor: 0 })
    }

    pub fn frame_count(&self) -> usize {
        self.paths.len()
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        let Some(path) = self.paths.get(self.cursor) else {
            return Ok(None);
        };
        let rgb = image::open(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?
            .to_rgb8();
        let (width, height) = rgb.dimensions();
        let frame = Frame::new(rgb.into_raw(), width, height, self.cursor);
        self.cursor += 1;
        Ok(Some(frame))
    }

    fn close(&mut self) {
        self.cursor = self.paths.len();
    }
}
