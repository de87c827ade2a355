use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::overlay::overlay_store::OverlayStore;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::frame_source::FrameSource;

/// Per-run driver settings.
pub struct DriverConfig {
    /// Expected frame count, for progress reporting. Zero when unknown.
    pub total_frames: usize,
    /// Called after each presented frame with `(done, total)`. Returning
    /// `false` requests a graceful stop.
    pub on_frame: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    /// External stop flag, checked once per cycle.
    pub cancelled: Arc<AtomicBool>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            total_frames: 0,
            on_frame: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Runs the acquire/detect/composite/present cycle to completion.
///
/// The driver owns scheduling only; frame acquisition, detection,
/// compositing and presentation stay behind their domain traits so every
/// stage can be swapped independently.
pub trait PipelineDriver: Send {
    fn run(
        &self,
        source: Box<dyn FrameSource>,
        detector: Box<dyn LandmarkDetector>,
        compositor: Box<dyn FrameCompositor>,
        sink: Box<dyn DisplaySink>,
        store: OverlayStore,
        logger: &mut dyn PipelineLogger,
        config: DriverConfig,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
