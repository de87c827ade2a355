use crate::shared::frame::Frame;
use crate::shared::landmarks::LandmarkSet;

/// Opaque pass-through configuration for the external detector.
///
/// The core supplies these values but does not interpret them; their
/// meaning belongs to the detector implementation. `refine_landmarks`
/// controls whether iris indices are present in the returned sets.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    pub max_faces: usize,
    pub refine_landmarks: bool,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_faces: 1,
            refine_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Domain interface for the external face-landmark detector.
///
/// Implementations may be stateful (tracking across frames), hence
/// `&mut self`. Zero returned sets means no face was detected, which is
/// not an error. A call failure is reported to the driver and treated as
/// transient.
pub trait LandmarkDetector: Send {
    /// Applies pass-through configuration. Default: ignore.
    fn configure(&mut self, config: &DetectorConfig) -> Result<(), Box<dyn std::error::Error>> {
        let _ = config;
        Ok(())
    }

    fn detect(&mut self, frame: &Frame) -> Result<Vec<LandmarkSet>, Box<dyn std::error::Error>>;
}
