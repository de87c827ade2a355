use std::path::PathBuf;

use image::RgbImage;

use crate::shared::canvas::Canvas;
use crate::video::domain::display_sink::DisplaySink;

/// Writes each presented canvas as a numbered PNG in the output directory.
pub struct ImageSequenceSink {
    dir: PathBuf,
    frames_written: usize,
}

impl ImageSequenceSink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl DisplaySink for ImageSequenceSink {
    fn present(&mut self, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>> {
        let img = RgbImage::from_raw(canvas.width(), canvas.height(), canvas.data().to_vec())
            .ok_or("canvas buffer does not match its dimensions")?;
        let path = self.dir.join(format!("frame_{:06}.png", self.frames_written));
        img.save(&path)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        self.frames_written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
