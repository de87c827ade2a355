use std::ops::{Deref, DerefMut};

use thiserror::Error;

use crate::shared::draw_state::DrawState;
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("frame is {frame_w}x{frame_h} but canvas is {canvas_w}x{canvas_h}")]
    DimensionMismatch {
        frame_w: u32,
        frame_h: u32,
        canvas_w: u32,
        canvas_h: u32,
    },
}

/// The mutable RGB output surface the compositor draws into.
///
/// Invariant: dimensions equal the current frame's dimensions for the whole
/// of a compositing pass (`match_dimensions` runs first). The canvas carries
/// the current `DrawState`; draws that need non-default parameters take a
/// `scoped_state` guard, which restores the default when dropped so state
/// never leaks into later draws or frames.
pub struct Canvas {
    data: Vec<u8>,
    width: u32,
    height: u32,
    state: DrawState,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            width: 0,
            height: 0,
            state: DrawState::default(),
        }
    }

    pub fn with_dimensions(width: u32, height: u32) -> Self {
        let mut canvas = Self::new();
        canvas.match_dimensions(width, height);
        canvas
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

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Resizes the surface iff the dimensions changed; contents are
    /// unspecified afterwards (the compositor clears before drawing).
    pub fn match_dimensions(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.data = vec![0; (width as usize) * (height as usize) * 3];
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Draws the source frame as the base layer, filling the full surface.
    pub fn draw_frame(&mut self, frame: &Frame) -> Result<(), CanvasError> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(CanvasError::DimensionMismatch {
                frame_w: frame.width(),
                frame_h: frame.height(),
                canvas_w: self.width,
                canvas_h: self.height,
            });
        }
        self.data.copy_from_slice(frame.data());
        Ok(())
    }

    /// Installs a draw state and returns a guard that restores the default
    /// on drop.
    pub fn scoped_state(&mut self, state: DrawState) -> StateScope<'_> {
        self.state = state;
        StateScope { canvas: self }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = ((y * self.width + x) * 3) as usize;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    /// Blends one RGB pixel under the current draw state.
    ///
    /// `coverage` is the source alpha fraction in [0,1]; the effective
    /// weight is `coverage * state.opacity`. Out-of-bounds coordinates are
    /// clipped silently so sprites may overlap frame edges.
    pub fn blend_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3], coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let alpha = (coverage * self.state.opacity).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let offset = ((y as u32 * self.width + x as u32) * 3) as usize;
        for c in 0..3 {
            let dst = self.data[offset + c];
            let blended = self.state.blend_mode.apply(dst, rgb[c]);
            let out = dst as f32 + (blended as f32 - dst as f32) * alpha;
            self.data[offset + c] = out.round().clamp(0.0, 255.0) as u8;
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard installed by [`Canvas::scoped_state`]; restores the default draw
/// state when dropped.
pub struct StateScope<'a> {
    canvas: &'a mut Canvas,
}

impl Deref for StateScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for StateScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for StateScope<'_> {
    fn drop(&mut self) {
        self.canvas.state = DrawState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::draw_state::BlendMode;

    fn solid_frame(rgb: [u8; 3], w: u32, h: u32) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&rgb);
        }
        Frame::new(data, w, h, 0)
    }

    #[test]
    fn test_match_dimensions_resizes_once() {
        let mut canvas = Canvas::new();
        canvas.match_dimensions(4, 2);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.data().len(), 24);

        // Same dimensions: buffer kept
        canvas.match_dimensions(4, 2);
        assert_eq!(canvas.data().len(), 24);

        canvas.match_dimensions(2, 2);
        assert_eq!(canvas.data().len(), 12);
    }

    #[test]
    fn test_draw_frame_copies_base_layer() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        let frame = solid_frame([10, 20, 30], 2, 2);
        canvas.draw_frame(&frame).unwrap();
        assert_eq!(canvas.pixel(1, 1), [10, 20, 30]);
    }

    #[test]
    fn test_draw_frame_dimension_mismatch_errors() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        let frame = solid_frame([0, 0, 0], 3, 2);
        assert!(canvas.draw_frame(&frame).is_err());
    }

    #[test]
    fn test_scoped_state_restores_default_on_drop() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        {
            let scoped = canvas.scoped_state(DrawState {
                opacity: 0.5,
                blend_mode: BlendMode::Multiply,
                soften_radius: 2.0,
            });
            assert_eq!(scoped.state().opacity, 0.5);
        }
        assert!(canvas.state().is_default());
    }

    #[test]
    fn test_blend_pixel_normal_full_opacity_replaces() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        canvas.blend_pixel(0, 0, [200, 100, 50], 1.0);
        assert_eq!(canvas.pixel(0, 0), [200, 100, 50]);
    }

    #[test]
    fn test_blend_pixel_zero_coverage_is_noop() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        canvas.draw_frame(&solid_frame([40, 40, 40], 2, 2)).unwrap();
        canvas.blend_pixel(0, 0, [200, 200, 200], 0.0);
        assert_eq!(canvas.pixel(0, 0), [40, 40, 40]);
    }

    #[test]
    fn test_blend_pixel_zero_opacity_is_noop() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        canvas.draw_frame(&solid_frame([40, 40, 40], 2, 2)).unwrap();
        let mut scoped = canvas.scoped_state(DrawState {
            opacity: 0.0,
            blend_mode: BlendMode::Normal,
            soften_radius: 0.0,
        });
        scoped.blend_pixel(0, 0, [200, 200, 200], 1.0);
        drop(scoped);
        assert_eq!(canvas.pixel(0, 0), [40, 40, 40]);
    }

    #[test]
    fn test_blend_pixel_half_opacity_interpolates() {
        let mut canvas = Canvas::with_dimensions(1, 1);
        canvas.draw_frame(&solid_frame([0, 0, 0], 1, 1)).unwrap();
        let mut scoped = canvas.scoped_state(DrawState {
            opacity: 0.5,
            blend_mode: BlendMode::Normal,
            soften_radius: 0.0,
        });
        scoped.blend_pixel(0, 0, [200, 100, 0], 1.0);
        drop(scoped);
        assert_eq!(canvas.pixel(0, 0), [100, 50, 0]);
    }

    #[test]
    fn test_blend_pixel_multiply_darkens() {
        let mut canvas = Canvas::with_dimensions(1, 1);
        canvas
            .draw_frame(&solid_frame([100, 100, 100], 1, 1))
            .unwrap();
        let mut scoped = canvas.scoped_state(DrawState {
            opacity: 1.0,
            blend_mode: BlendMode::Multiply,
            soften_radius: 0.0,
        });
        scoped.blend_pixel(0, 0, [128, 128, 128], 1.0);
        drop(scoped);
        let [r, _, _] = canvas.pixel(0, 0);
        assert!(r < 100);
    }

    #[test]
    fn test_blend_pixel_clips_out_of_bounds() {
        let mut canvas = Canvas::with_dimensions(2, 2);
        canvas.blend_pixel(-1, 0, [255, 255, 255], 1.0);
        canvas.blend_pixel(0, 2, [255, 255, 255], 1.0);
        canvas.blend_pixel(5, 5, [255, 255, 255], 1.0);
        assert!(canvas.data().iter().all(|&b| b == 0));
    }
}
