use crate::shared::canvas::Canvas;

/// Fills a closed polygon with a translucent RGBA color under the canvas's
/// current draw state, using even-odd scanline coverage.
///
/// Points are pixel-space vertices in boundary order; a duplicated
/// first/last point (closed index rings produce one) adds only a
/// degenerate edge and is harmless.
pub fn fill_polygon(canvas: &mut Canvas, points: &[(f64, f64)], color: [u8; 4]) {
    if points.len() < 3 {
        return;
    }

    let coverage = color[3] as f32 / 255.0;
    let rgb = [color[0], color[1], color[2]];

    let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let y_start = min_y.floor().max(0.0) as i64;
    let y_end = max_y.ceil().min(canvas.height() as f64) as i64;

    let mut crossings: Vec<f64> = Vec::new();
    for y in y_start..y_end {
        let yc = y as f64 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];
            if (ay <= yc) != (by <= yc) {
                crossings.push(ax + (yc - ay) * (bx - ax) / (by - ay));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let x_start = pair[0].round().max(0.0) as i64;
            let x_end = pair[1].round().min(canvas.width() as f64) as i64;
            for x in x_start..x_end {
                canvas.blend_pixel(x, y, rgb, coverage);
            }
        }
    }
}
