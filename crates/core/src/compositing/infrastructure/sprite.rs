use crate::geometry::region::Region;
use crate::overlay::domain::overlay_asset::OverlayImage;
use crate::shared::canvas::Canvas;

use super::soften;

/// Draws the overlay image centered on a region, scaled to size x size,
/// under the canvas's current draw state.
///
/// The sprite is resampled (nearest) into `scratch`, softened per the
/// state's radius, then alpha-blended pixel by pixel. Callers must not
/// pass a non-drawable region; a sub-pixel size still degrades to a no-op
/// rather than a degenerate draw.
pub fn draw_sprite(canvas: &mut Canvas, image: &OverlayImage, region: Region, scratch: &mut Vec<u8>) {
    let size = region.size.round();
    if size < 1.0 || !size.is_finite() {
        return;
    }
    let size = size as usize;

    scale_nearest(image, size, scratch);

    let radius = canvas.state().soften_radius.round();
    if radius >= 1.0 {
        soften::box_blur_rgba(scratch, size, size, radius as usize);
    }

    let (left, top) = region.top_left();
    let left = left.round() as i64;
    let top = top.round() as i64;

    for row in 0..size {
        for col in 0..size {
            let offset = (row * size + col) * 4;
            let alpha = scratch[offset + 3];
            if alpha == 0 {
                continue;
            }
            let rgb = [scratch[offset], scratch[offset + 1], scratch[offset + 2]];
            canvas.blend_pixel(
                left + col as i64,
                top + row as i64,
                rgb,
                alpha as f32 / 255.0,
            );
        }
    }
}

fn scale_nearest(image: &OverlayImage, size: usize, out: &mut Vec<u8>) {
    out.clear();
    out.resize(size * size * 4, 0);

    let src_w = image.width() as usize;
    let src_h = image.height() as usize;
    if src_w == 0 || src_h == 0 {
        return;
    }

    for row in 0..size {
        let sy = (row * src_h / size).min(src_h - 1);
        for col in 0..size {
            let sx = (col * src_w / size).min(src_w - 1);
            let src_offset = (sy * src_w + sx) * 4;
            let dst_offset = (row * size + col) * 4;
            out[dst_offset..dst_offset + 4]
                .copy_from_slice(&image.data()[src_offset..src_offset + 4]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::draw_state::{BlendMode, DrawState};
    use crate::shared::frame::Frame;

    fn dark_canvas(w: u32, h: u32) -> Canvas {
        let mut canvas = Canvas::with_dimensions(w, h);
        let frame = Frame::new(vec![20; (w * h * 3) as usize], w, h, 0);
        canvas.draw_frame(&frame).unwrap();
        canvas
    }

    fn solid_sprite(rgba: [u8; 4]) -> OverlayImage {
        OverlayImage::new(rgba.repeat(4), 2, 2)
    }

    #[test]
    fn test_sprite_covers_region_square() {
        let mut canvas = dark_canvas(20, 20);
        let sprite = solid_sprite([200, 0, 0, 255]);
        let mut scratch = Vec::new();
        draw_sprite(
            &mut canvas,
            &sprite,
            Region::new((10.0, 10.0), 6.0),
            &mut scratch,
        );

        assert_eq!(canvas.pixel(10, 10), [200, 0, 0]);
        assert_eq!(canvas.pixel(8, 8), [200, 0, 0]);
        // Outside the 6x6 square
        assert_eq!(canvas.pixel(2, 2), [20, 20, 20]);
    }

    #[test]
    fn test_transparent_sprite_pixels_skipped() {
        let mut canvas = dark_canvas(10, 10);
        let sprite = solid_sprite([255, 255, 255, 0]);
        let mut scratch = Vec::new();
        draw_sprite(
            &mut canvas,
            &sprite,
            Region::new((5.0, 5.0), 4.0),
            &mut scratch,
        );
        assert!(canvas.data().iter().all(|&b| b == 20));
    }

    #[test]
    fn test_subpixel_size_is_noop() {
        let mut canvas = dark_canvas(10, 10);
        let sprite = solid_sprite([255, 0, 0, 255]);
        let mut scratch = Vec::new();
        draw_sprite(
            &mut canvas,
            &sprite,
            Region::new((5.0, 5.0), 0.3),
            &mut scratch,
        );
        assert!(canvas.data().iter().all(|&b| b == 20));
    }

    #[test]
    fn test_sprite_overlapping_edge_is_clipped() {
        let mut canvas = dark_canvas(10, 10);
        let sprite = solid_sprite([0, 200, 0, 255]);
        let mut scratch = Vec::new();
        draw_sprite(
            &mut canvas,
            &sprite,
            Region::new((0.0, 0.0), 8.0),
            &mut scratch,
        );
        assert_eq!(canvas.pixel(1, 1), [0, 200, 0]);
        assert_eq!(canvas.pixel(6, 6), [20, 20, 20]);
    }

    #[test]
    fn test_state_opacity_applies() {
        let mut canvas = dark_canvas(10, 10);
        let sprite = solid_sprite([220, 220, 220, 255]);
        let mut scratch = Vec::new();
        let mut scoped = canvas.scoped_state(DrawState {
            opacity: 0.5,
            blend_mode: BlendMode::Normal,
            soften_radius: 0.0,
        });
        draw_sprite(
            &mut scoped,
            &sprite,
            Region::new((5.0, 5.0), 4.0),
            &mut scratch,
        );
        drop(scoped);

        let [r, _, _] = canvas.pixel(5, 5);
        assert_eq!(r, 120); // 20 + (220 - 20) * 0.5
    }

    #[test]
    fn test_soften_radius_softens_sprite_edges() {
        // 4x4 white sprite, opaque only in the center 2x2
        let mut data = vec![0u8; 4 * 4 * 4];
        for y in 1..3 {
            for x in 1..3 {
                let offset = (y * 4 + x) * 4;
                data[offset..offset + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
        let sprite = OverlayImage::new(data, 4, 4);

        let mut canvas = dark_canvas(30, 30);
        let mut scratch = Vec::new();
        let mut scoped = canvas.scoped_state(DrawState {
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            soften_radius: 2.0,
        });
        draw_sprite(
            &mut scoped,
            &sprite,
            Region::new((15.0, 15.0), 10.0),
            &mut scratch,
        );
        drop(scoped);

        let [center, _, _] = canvas.pixel(15, 15);
        let [edge, _, _] = canvas.pixel(13, 13);
        assert_eq!(center, 255);
        assert!(
            edge > 20 && edge < 255,
            "softened edge should be partial, got {edge}"
        );
    }
}
