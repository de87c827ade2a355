use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::detection::domain::landmark_detector::{DetectorConfig, LandmarkDetector};
use crate::shared::frame::Frame;
use crate::shared::landmarks::{Landmark, LandmarkSet};

#[derive(Deserialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct JsonDetection {
    faces: Vec<Vec<JsonPoint>>,
}

/// Replays pre-computed landmark results from JSON sidecar files.
///
/// Each frame index `N` maps to `{dir}/NNNNNN.json` containing
/// `{"faces": [[{"x":..,"y":..}, ...], ...]}`. A missing or unreadable
/// sidecar is a detector-call failure: the driver logs it and retries on
/// the next frame, matching how a live detector drops frames.
pub struct JsonLandmarkDetector {
    dir: PathBuf,
    max_faces: usize,
}

impl JsonLandmarkDetector {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_faces: DetectorConfig::default().max_faces,
        }
    }

    fn sidecar_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{index:06}.json"))
    }
}

impl LandmarkDetector for JsonLandmarkDetector {
    fn configure(&mut self, config: &DetectorConfig) -> Result<(), Box<dyn std::error::Error>> {
        self.max_faces = config.max_faces;
        Ok(())
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<LandmarkSet>, Box<dyn std::error::Error>> {
        let path = self.sidecar_path(frame.index());
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("no landmark sidecar {}: {e}", path.display()))?;
        let parsed: JsonDetection = serde_json::from_str(&raw)
            .map_err(|e| format!("malformed landmark sidecar {}: {e}", path.display()))?;

        let mut faces = Vec::with_capacity(parsed.faces.len().min(self.max_faces));
        for face in parsed.faces.into_iter().take(self.max_faces) {
            let mut points = Vec::with_capacity(face.len());
            for p in face {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(
                        format!("non-finite landmark in sidecar {}", path.display()).into()
                    );
                }
                points.push(Landmark::new(p.x, p.y));
            }
            faces.push(LandmarkSet::new(points));
        }
        Ok(faces)
    }
}
