use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::overlay::overlay_store::OverlayStore;
use crate::pipeline::detection_slot::DetectionSlot;
use crate::pipeline::pipeline_driver::{DriverConfig, PipelineDriver};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::canvas::Canvas;
use crate::shared::frame::Frame;
use crate::shared::landmarks::DetectionResult;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::frame_source::FrameSource;

type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Drives the pipeline with detection on a dedicated thread.
///
/// Layout: `main [acquire/composite/present] ⇄ detect`
///
/// Both channels are bounded to one entry, so exactly one detection is in
/// flight and the blocking `recv` on the result channel is the only place
/// the main loop suspends. The overlay store is re-read once per cycle,
/// between receiving a result and compositing, so control changes land on
/// the very next frame without tearing within a frame.
pub struct ThreadedPipelineDriver;

impl ThreadedPipelineDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadedPipelineDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineDriver for ThreadedPipelineDriver {
    fn run(
        &self,
        mut source: Box<dyn FrameSource>,
        detector: Box<dyn LandmarkDetector>,
        mut compositor: Box<dyn FrameCompositor>,
        mut sink: Box<dyn DisplaySink>,
        store: OverlayStore,
        logger: &mut dyn PipelineLogger,
        config: DriverConfig,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (request_tx, request_rx) = crossbeam_channel::bounded::<Frame>(1);
        let (result_tx, result_rx) =
            crossbeam_channel::bounded::<Result<DetectionResult, SendError>>(1);

        let detect_handle = spawn_detector(detector, request_rx, result_tx);

        let mut canvas = Canvas::new();
        let mut slot = DetectionSlot::new();
        let mut frames_done: usize = 0;
        let mut first_error: Option<Box<dyn std::error::Error>> = None;

        loop {
            if config.cancelled.load(Ordering::Relaxed) {
                slot.cancel();
                break;
            }

            let frame = match source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    first_error = Some(e);
                    break;
                }
            };

            if let Err(e) = slot.submit() {
                first_error = Some(e.to_string().into());
                break;
            }

            let detect_started = Instant::now();
            if request_tx.send(frame).is_err() {
                first_error = Some("Detector thread exited unexpectedly".into());
                break;
            }
            let outcome = match result_rx.recv() {
                Ok(outcome) => outcome,
                Err(_) => {
                    first_error = Some("Detector thread exited unexpectedly".into());
                    break;
                }
            };
            logger.timing("detect", detect_started.elapsed().as_secs_f64() * 1000.0);

            if config.cancelled.load(Ordering::Relaxed) {
                slot.cancel();
            }
            if !slot.complete() {
                // Result arrived after stop: discard, never present
                break;
            }

            let result = match outcome {
                Ok(result) => result,
                Err(e) => {
                    log::warn!("Landmark detection failed, skipping frame: {e}");
                    continue;
                }
            };

            // One snapshot per cycle keeps a frame internally consistent
            let overlay = store.snapshot();

            let composite_started = Instant::now();
            if let Err(e) = compositor.composite(&mut canvas, &result, &overlay) {
                first_error = Some(e);
                break;
            }
            logger.timing(
                "composite",
                composite_started.elapsed().as_secs_f64() * 1000.0,
            );

            let present_started = Instant::now();
            if let Err(e) = sink.present(&canvas) {
                first_error = Some(e);
                break;
            }
            logger.timing("present", present_started.elapsed().as_secs_f64() * 1000.0);

            frames_done += 1;
            logger.progress(frames_done, config.total_frames);

            if let Some(ref callback) = config.on_frame {
                if !callback(frames_done, config.total_frames) {
                    config.cancelled.store(true, Ordering::Relaxed);
                    slot.cancel();
                    break;
                }
            }
        }

        drop(request_tx);
        // Unblock a worker stuck sending into the full result channel
        for _stale in result_rx.iter() {}

        if detect_handle.join().is_err() && first_error.is_none() {
            first_error = Some("Detector thread panicked".into());
        }

        source.close();
        if let Err(e) = sink.close() {
            if first_error.is_none() {
                first_error = Some(e);
            }
        }

        logger.summary();

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn spawn_detector(
    mut detector: Box<dyn LandmarkDetector>,
    request_rx: crossbeam_channel::Receiver<Frame>,
    result_tx: crossbeam_channel::Sender<Result<DetectionResult, SendError>>,
) -> std::thread::JoinHandle<Box<dyn LandmarkDetector>> {
    std::thread::spawn(move || {
        for frame in request_rx {
            let outcome = match detector.detect(&frame) {
                Ok(faces) => Ok(DetectionResult { frame, faces }),
                Err(e) => Err(e.to_string().into()),
            };
            if result_tx.send(outcome).is_err() {
                break;
            }
        }
        detector
    })
}
