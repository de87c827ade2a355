use std::sync::Arc;

use crate::shared::constants::{DEFAULT_OPACITY, DEFAULT_SOFTEN_RADIUS};
use crate::shared::draw_state::BlendMode;

/// A decoded drawable overlay: contiguous RGBA bytes in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl OverlayImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 4,
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }
}

/// A consistent read of the overlay selection for the duration of one
/// frame's draws.
///
/// `image: None` means no asset is selected or the selected asset has not
/// finished loading; the compositor skips overlay draws in that case
/// without treating it as an error.
#[derive(Clone, Debug)]
pub struct OverlaySnapshot {
    pub image: Option<Arc<OverlayImage>>,
    pub opacity: f32,
    pub blend_mode: BlendMode,
    pub soften_radius: f32,
    pub lip_tint: Option<[u8; 4]>,
}

impl Default for OverlaySnapshot {
    fn default() -> Self {
        Self {
            image: None,
            opacity: DEFAULT_OPACITY,
            blend_mode: BlendMode::Normal,
            soften_radius: DEFAULT_SOFTEN_RADIUS,
            lip_tint: None,
        }
    }
}
