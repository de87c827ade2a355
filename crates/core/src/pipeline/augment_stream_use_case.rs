use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::detection::domain::landmark_detector::{DetectorConfig, LandmarkDetector};
use crate::overlay::overlay_store::OverlayStore;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::frame_source::FrameSource;

use super::pipeline_driver::{DriverConfig, PipelineDriver};
use super::pipeline_logger::PipelineLogger;

/// Orchestrates the full stream-augmentation pipeline.
///
/// Wires domain components together and delegates execution to a
/// `PipelineDriver`. This is a single-use struct: `execute` consumes the
/// owned components, so calling it twice will fail.
pub struct AugmentStreamUseCase {
    source: Option<Box<dyn FrameSource>>,
    detector: Option<Box<dyn LandmarkDetector>>,
    compositor: Option<Box<dyn FrameCompositor>>,
    sink: Option<Box<dyn DisplaySink>>,
    store: OverlayStore,
    driver: Box<dyn PipelineDriver>,
    detector_config: DetectorConfig,
    total_frames: usize,
    on_frame: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    cancelled: Arc<AtomicBool>,
}

impl AugmentStreamUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn LandmarkDetector>,
        compositor: Box<dyn FrameCompositor>,
        sink: Box<dyn DisplaySink>,
        store: OverlayStore,
        driver: Box<dyn PipelineDriver>,
        detector_config: DetectorConfig,
        total_frames: usize,
        on_frame: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            source: Some(source),
            detector: Some(detector),
            compositor: Some(compositor),
            sink: Some(sink),
            store,
            driver,
            detector_config,
            total_frames,
            on_frame,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
        }
    }

    /// Shared handle for adjusting overlay settings while the pipeline runs.
    pub fn store(&self) -> OverlayStore {
        self.store.clone()
    }

    pub fn execute(
        &mut self,
        logger: &mut dyn PipelineLogger,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut detector = self.detector.take().ok_or("Pipeline already executed")?;
        detector.configure(&self.detector_config)?;

        let config = DriverConfig {
            total_frames: self.total_frames,
            on_frame: self.on_frame.take(),
            cancelled: self.cancelled.clone(),
        };

        self.driver.run(
            self.source.take().ok_or("Pipeline already executed")?,
            detector,
            self.compositor.take().ok_or("Pipeline already executed")?,
            self.sink.take().ok_or("Pipeline already executed")?,
            self.store.clone(),
            logger,
            config,
        )
    }
}
