use crate::overlay::domain::overlay_asset::OverlaySnapshot;
use crate::shared::canvas::Canvas;
use crate::shared::landmarks::DetectionResult;

/// Domain interface for rendering one output frame.
///
/// Implementations draw the base frame and the per-face overlays into the
/// canvas. Drawing is non-suspending and runs to completion before the
/// surface is considered updated; `&mut self` allows reusable scratch
/// buffers.
pub trait FrameCompositor: Send {
    fn composite(
        &mut self,
        canvas: &mut Canvas,
        result: &DetectionResult,
        overlay: &OverlaySnapshot,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
