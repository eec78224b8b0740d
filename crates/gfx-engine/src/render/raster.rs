use crate::math::{Vec3, EPSILON};
use crate::paint::Color;

use super::DepthBuffer;

/// Fill depth is pushed towards the far plane by this fraction of the
/// remaining range, plus a constant floor, so wireframe drawn at the exact
/// vertex depth stays visible on top of its own face.
const DEPTH_BIAS_SCALE: f32 = 0.01;
const DEPTH_BIAS_MIN: f32 = 1e-6;

/// Fills an NDC triangle with a flat color.
///
/// A pixel is covered when its center lies inside or on an edge. Either
/// winding is accepted; zero-area triangles draw nothing.
pub fn fill_triangle(buf: &mut DepthBuffer, points: [Vec3; 3], color: Color) {
    let [p0, p1, p2] = points;
    let (a, b, c) = (p0.xy(), p1.xy(), p2.xy());

    let area = (b - a).cross(c - a);
    if !area.is_finite() || area.abs() <= EPSILON {
        return;
    }

    let min_x = p0.x.min(p1.x).min(p2.x);
    let max_x = p0.x.max(p1.x).max(p2.x);
    let min_y = p0.y.min(p1.y).min(p2.y);
    let max_y = p0.y.max(p1.y).max(p2.y);

    let (x0, y0) = buf.ndc_to_pixel(min_x, min_y);
    let (x1, y1) = buf.ndc_to_pixel(max_x, max_y);
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(buf.width() - 1);
    let y1 = y1.min(buf.height() - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = buf.pixel_center(x, y);

            // Barycentric weights; dividing by the signed area makes them
            // positive inside for both windings.
            let w0 = (c - b).cross(p - b) / area;
            let w1 = (a - c).cross(p - c) / area;
            let w2 = (b - a).cross(p - a) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let z = w0 * p0.z + w1 * p1.z + w2 * p2.z;
            let z = z + DEPTH_BIAS_SCALE * (1.0 - z) + DEPTH_BIAS_MIN;
            buf.set_pixel(x, y, color, z);
        }
    }
}
