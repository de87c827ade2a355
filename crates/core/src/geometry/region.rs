/// A derived overlay target: center point and size in pixel space.
///
/// Recomputed from landmarks every frame, never cached (landmarks move).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub center: (f64, f64),
    pub size: f64,
}

impl Region {
    pub fn new(center: (f64, f64), size: f64) -> Self {
        Self { center, size }
    }

    /// Whether a draw call for this region is well-defined.
    ///
    /// Zero or negative size is an expected transient (landmarks
    /// momentarily degenerate) and callers skip the draw rather than
    /// attempting it.
    pub fn is_drawable(&self) -> bool {
        self.size > 0.0
            && self.size.is_finite()
            && self.center.0.is_finite()
            && self.center.1.is_finite()
    }

    /// Top-left corner of the size x size square centered on this region.
    pub fn top_left(&self) -> (f64, f64) {
        (
            self.center.0 - self.size / 2.0,
            self.center.1 - self.size / 2.0,
        )
    }
}
