use crate::shared::frame::Frame;

/// A single facial keypoint, normalized to [0,1] relative to frame
/// width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another landmark, in normalized space.
    pub fn distance(self, other: Landmark) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Maps the normalized position into pixel space for the given
    /// canvas dimensions.
    pub fn to_pixel(self, width: f64, height: f64) -> (f64, f64) {
        (self.x * width, self.y * height)
    }
}

/// The full indexed keypoint collection for one detected face.
///
/// Index positions are semantically fixed by the external detector's
/// topology; consumers resolve them through a `LandmarkSchema` rather than
/// inline literals.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }
}

/// One detector invocation's output: the source frame plus zero or more
/// landmark sets, in the detector's face order.
///
/// Consumed immediately by the compositor and discarded; never retained
/// across frames.
#[derive(Clone, Debug)]
pub struct DetectionResult {
    pub frame: Frame,
    pub faces: Vec<LandmarkSet>,
}
