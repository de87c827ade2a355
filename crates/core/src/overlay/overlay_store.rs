use std::sync::{Arc, Mutex};

use crate::shared::draw_state::BlendMode;

use super::domain::overlay_asset::{OverlayImage, OverlaySnapshot};

/// Holds the current overlay selection and render parameters.
///
/// Cheaply clonable handle; mutation comes from the selection layer (CLI
/// flags, UI callbacks), reads from the driver once per frame. `snapshot`
/// returns an owned copy so a selection change mid-frame can never render
/// half a frame with old parameters and half with new.
#[derive(Clone, Default)]
pub struct OverlayStore {
    inner: Arc<Mutex<OverlaySnapshot>>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_overlay(&self, image: Arc<OverlayImage>) {
        self.lock().image = Some(image);
    }

    pub fn clear_overlay(&self) {
        self.lock().image = None;
    }

    pub fn set_opacity(&self, opacity: f32) {
        self.lock().opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn set_blend_mode(&self, blend_mode: BlendMode) {
        self.lock().blend_mode = blend_mode;
    }

    pub fn set_soften_radius(&self, radius: f32) {
        self.lock().soften_radius = radius.max(0.0);
    }

    pub fn set_lip_tint(&self, tint: Option<[u8; 4]>) {
        self.lock().lip_tint = tint;
    }

    /// Consistent read of {asset, opacity, blend mode, soften, lip tint}
    /// for one frame's draw calls.
    pub fn snapshot(&self) -> OverlaySnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, OverlaySnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
