//! Pure per-frame geometry: landmark subsets to overlay regions.
//!
//! Every function is stateless and deterministic. Coordinates come in
//! normalized [0,1] and are scaled by the *current* canvas dimensions, not
//! a reference resolution, which keeps overlays scale-correct across
//! camera resolutions.

use thiserror::Error;

use crate::shared::landmarks::{Landmark, LandmarkSet};

use super::landmark_schema::{EyeIndices, IrisIndices};
use super::region::Region;

/// Sizing multiplier for iris overlays.
///
/// Tunable, not derived: the iris-edge landmark sits well inside the
/// visible iris boundary, and 2.4 was found empirically to cover the full
/// iris at typical webcam distances.
pub const IRIS_SCALE: f64 = 2.4;

/// Geometry failures are caller-configuration errors (a schema that does
/// not match the detector's topology), surfaced immediately rather than
/// silently clamped.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("landmark index {index} out of bounds for set of {len} points; schema/detector topology mismatch")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("empty landmark subset")]
    EmptySubset,
}

fn lookup(set: &LandmarkSet, index: usize) -> Result<Landmark, GeometryError> {
    set.get(index).ok_or(GeometryError::IndexOutOfBounds {
        index,
        len: set.len(),
    })
}

/// Arithmetic mean of a non-empty landmark subset, in normalized space.
pub fn eye_center(points: &[Landmark]) -> Result<(f64, f64), GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptySubset);
    }
    let n = points.len() as f64;
    let x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let y = points.iter().map(|p| p.y).sum::<f64>() / n;
    Ok((x, y))
}

/// Width-normalized eye diameter: distance between the two eye corners
/// scaled by canvas width. Coincident corners yield 0; the caller skips
/// the draw.
pub fn eye_size(outer: Landmark, inner: Landmark, canvas_width: f64) -> f64 {
    outer.distance(inner) * canvas_width
}

/// Whole-eye overlay region from the schema's contour and corner indices.
pub fn eye_region(
    set: &LandmarkSet,
    eye: &EyeIndices,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Region, GeometryError> {
    let contour = eye
        .contour
        .iter()
        .map(|&i| lookup(set, i))
        .collect::<Result<Vec<_>, _>>()?;
    let (cx, cy) = eye_center(&contour)?;
    let size = eye_size(
        lookup(set, eye.outer_corner)?,
        lookup(set, eye.inner_corner)?,
        canvas_width,
    );
    Ok(Region::new((cx * canvas_width, cy * canvas_height), size))
}

/// Iris overlay region: centered on the pupil landmark, sized by the
/// pupil-to-edge distance scaled by canvas width and `scale`.
pub fn iris_region(
    set: &LandmarkSet,
    iris: &IrisIndices,
    canvas_width: f64,
    canvas_height: f64,
    scale: f64,
) -> Result<Region, GeometryError> {
    let pupil = lookup(set, iris.pupil)?;
    let edge = lookup(set, iris.edge)?;
    let size = pupil.distance(edge) * canvas_width * scale;
    Ok(Region::new(pupil.to_pixel(canvas_width, canvas_height), size))
}

/// Maps an ordered index list to pixel-space points, preserving order.
/// A list whose first and last indices match defines a closed polygon
/// boundary.
pub fn lip_polygon(
    set: &LandmarkSet,
    indices: &[usize],
    canvas_width: f64,
    canvas_height: f64,
) -> Result<Vec<(f64, f64)>, GeometryError> {
    indices
        .iter()
        .map(|&i| Ok(lookup(set, i)?.to_pixel(canvas_width, canvas_height)))
        .collect()
}
