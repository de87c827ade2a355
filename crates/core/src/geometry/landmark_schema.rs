//! Named index table for the external detector's landmark topology.
//!
//! All magic indices live here. Swapping in a detector with a different
//! topology means providing a different schema; geometry and compositing
//! code never hardcodes landmark numbers.

/// Indices describing one eye in the landmark topology.
#[derive(Clone, Copy, Debug)]
pub struct EyeIndices {
    /// Contour ring around the eye; its centroid anchors the overlay.
    pub contour: &'static [usize],
    pub outer_corner: usize,
    pub inner_corner: usize,
}

/// Indices describing one iris (refined landmarks only).
#[derive(Clone, Copy, Debug)]
pub struct IrisIndices {
    pub pupil: usize,
    /// One of the iris boundary points; its distance from the pupil sizes
    /// the overlay.
    pub edge: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct LandmarkSchema {
    pub left_eye: EyeIndices,
    pub right_eye: EyeIndices,
    pub left_iris: IrisIndices,
    pub right_iris: IrisIndices,
    pub upper_lip: &'static [usize],
    pub lower_lip: &'static [usize],
    /// Point count without iris refinement.
    pub base_point_count: usize,
    /// Point count with iris refinement; sets at least this long carry
    /// valid iris indices.
    pub refined_point_count: usize,
}

const MEDIAPIPE_LEFT_EYE_CONTOUR: &[usize] = &[
    263, 249, 390, 373, 374, 380, 381, 382, 362, 466, 388, 387, 386, 385, 384, 398,
];

const MEDIAPIPE_RIGHT_EYE_CONTOUR: &[usize] = &[
    33, 7, 163, 144, 145, 153, 154, 155, 133, 246, 161, 160, 159, 158, 157, 173,
];

// Outer ring then inner ring; first and last index match, closing the
// polygon boundary.
const MEDIAPIPE_UPPER_LIP: &[usize] = &[
    61, 185, 40, 39, 37, 0, 267, 269, 270, 409, 291, 308, 415, 310, 311, 312, 13, 82, 81, 80, 191,
    78, 61,
];

const MEDIAPIPE_LOWER_LIP: &[usize] = &[
    61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291, 308, 324, 318, 402, 317, 14, 87, 178, 88,
    95, 78, 61,
];

impl LandmarkSchema {
    /// Schema for the MediaPipe Face Mesh topology: 468 base points,
    /// indices 468-477 are the iris refinements (468/473 the pupil
    /// centers).
    pub fn mediapipe_face_mesh() -> Self {
        Self {
            left_eye: EyeIndices {
                contour: MEDIAPIPE_LEFT_EYE_CONTOUR,
                outer_corner: 263,
                inner_corner: 362,
            },
            right_eye: EyeIndices {
                contour: MEDIAPIPE_RIGHT_EYE_CONTOUR,
                outer_corner: 33,
                inner_corner: 133,
            },
            left_iris: IrisIndices {
                pupil: 468,
                edge: 469,
            },
            right_iris: IrisIndices {
                pupil: 473,
                edge: 474,
            },
            upper_lip: MEDIAPIPE_UPPER_LIP,
            lower_lip: MEDIAPIPE_LOWER_LIP,
            base_point_count: 468,
            refined_point_count: 478,
        }
    }
}

impl Default for LandmarkSchema {
    fn default() -> Self {
        Self::mediapipe_face_mesh()
    }
}
