/// Box blur over an interleaved RGBA buffer, one horizontal and one
/// vertical pass.
///
/// Approximates the soft-edge look of a small gaussian well enough for
/// sprite softening; sprites are small, so the O(pixels * radius) window
/// walk is not worth optimizing.
pub fn box_blur_rgba(data: &mut [u8], width: usize, height: usize, radius: usize) {
    if radius == 0 || width == 0 || height == 0 {
        return;
    }
    let mut temp = vec![0u8; data.len()];
    blur_pass(data, &mut temp, width, height, radius, Axis::Horizontal);
    blur_pass(&temp, data, width, height, radius, Axis::Vertical);
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn blur_pass(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize, axis: Axis) {
    for y in 0..height {
        for x in 0..width {
            let (span, limit) = match axis {
                Axis::Horizontal => (x, width),
                Axis::Vertical => (y, height),
            };
            let lo = span.saturating_sub(radius);
            let hi = (span + radius).min(limit - 1);

            let mut sums = [0u32; 4];
            for s in lo..=hi {
                let (px, py) = match axis {
                    Axis::Horizontal => (s, y),
                    Axis::Vertical => (x, s),
                };
                let offset = (py * width + px) * 4;
                for (c, sum) in sums.iter_mut().enumerate() {
                    *sum += src[offset + c] as u32;
                }
            }

            let count = (hi - lo + 1) as u32;
            let offset = (y * width + x) * 4;
            for (c, sum) in sums.iter().enumerate() {
                dst[offset + c] = ((sum + count / 2) / count) as u8;
            }
        }
    }
}
