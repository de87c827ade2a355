use crate::compositing::domain::frame_compositor::FrameCompositor;
use crate::geometry::face_geometry::{self, IRIS_SCALE};
use crate::geometry::landmark_schema::LandmarkSchema;
use crate::geometry::region::Region;
use crate::overlay::domain::overlay_asset::OverlaySnapshot;
use crate::shared::canvas::Canvas;
use crate::shared::draw_state::{BlendMode, DrawState};
use crate::shared::landmarks::{DetectionResult, LandmarkSet};

use super::{polygon, sprite};

/// Which landmark-derived region anchors the overlay sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAnchor {
    /// Whole-eye regions from the contour centroid and corner distance.
    Eyes,
    /// Iris regions from the refined pupil/edge landmarks; falls back to
    /// eye regions for sets detected without iris refinement.
    Iris,
}

/// CPU compositor: base frame plus per-face overlay sprites and lip tint,
/// drawn in a fixed order with tightly scoped draw state.
///
/// Draw-state scoping is the correctness core here: each sprite draw and
/// the lip fill run under their own `scoped_state`, restored before the
/// next draw, so opacity/blend/soften never leak into the lip fill, the
/// next face, or the next frame.
pub struct CpuCompositor {
    schema: LandmarkSchema,
    anchor: OverlayAnchor,
    iris_scale: f64,
    sprite_scratch: Vec<u8>,
}

impl CpuCompositor {
    pub fn new(schema: LandmarkSchema, anchor: OverlayAnchor) -> Self {
        Self {
            schema,
            anchor,
            iris_scale: IRIS_SCALE,
            sprite_scratch: Vec::new(),
        }
    }

    pub fn with_iris_scale(mut self, scale: f64) -> Self {
        self.iris_scale = scale;
        self
    }

    fn face_regions(
        &self,
        set: &LandmarkSet,
        width: f64,
        height: f64,
    ) -> Result<[Region; 2], face_geometry::GeometryError> {
        let refined =
            self.anchor == OverlayAnchor::Iris && set.len() >= self.schema.refined_point_count;
        if refined {
            Ok([
                face_geometry::iris_region(set, &self.schema.left_iris, width, height, self.iris_scale)?,
                face_geometry::iris_region(set, &self.schema.right_iris, width, height, self.iris_scale)?,
            ])
        } else {
            Ok([
                face_geometry::eye_region(set, &self.schema.left_eye, width, height)?,
                face_geometry::eye_region(set, &self.schema.right_eye, width, height)?,
            ])
        }
    }
}

impl Default for CpuCompositor {
    fn default() -> Self {
        Self::new(LandmarkSchema::default(), OverlayAnchor::Iris)
    }
}

impl FrameCompositor for CpuCompositor {
    fn composite(
        &mut self,
        canvas: &mut Canvas,
        result: &DetectionResult,
        overlay: &OverlaySnapshot,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let frame = &result.frame;
        canvas.match_dimensions(frame.width(), frame.height());
        canvas.clear();
        canvas.draw_frame(frame)?;

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        // Faces in detector order; its ordering is authoritative.
        for set in &result.faces {
            let regions = self.face_regions(set, width, height)?;

            if let Some(image) = overlay.image.as_deref() {
                for region in regions {
                    if !region.is_drawable() {
                        continue;
                    }
                    let mut scoped = canvas.scoped_state(DrawState {
                        opacity: overlay.opacity,
                        blend_mode: overlay.blend_mode,
                        soften_radius: overlay.soften_radius,
                    });
                    sprite::draw_sprite(&mut scoped, image, region, &mut self.sprite_scratch);
                }
            }

            if let Some(tint) = overlay.lip_tint {
                let upper = face_geometry::lip_polygon(set, self.schema.upper_lip, width, height)?;
                let lower = face_geometry::lip_polygon(set, self.schema.lower_lip, width, height)?;
                let mut scoped = canvas.scoped_state(DrawState {
                    opacity: 1.0,
                    blend_mode: BlendMode::Multiply,
                    soften_radius: 0.0,
                });
                polygon::fill_polygon(&mut scoped, &upper, tint);
                polygon::fill_polygon(&mut scoped, &lower, tint);
            }
        }

        Ok(())
    }
}
