use crate::math::Vec3;
use crate::paint::Color;

use super::DepthBuffer;

/// Draws the NDC segment `a → b`, one pixel per step along the major axis,
/// with depth interpolated between the endpoints.
///
/// The segment is first cut to the visible square, so the step count never
/// exceeds the buffer's width plus height.
pub fn draw_line(buf: &mut DepthBuffer, a: Vec3, b: Vec3, color: Color) {
    let Some((a, b)) = clip_to_view(a, b) else { return; };

    let (ax, ay) = buf.ndc_to_pixel(a.x, a.y);
    let (bx, by) = buf.ndc_to_pixel(b.x, b.y);

    let dx = bx as i64 - ax as i64;
    let dy = by as i64 - ay as i64;
    let steps = dx.abs().max(dy.abs()).min(buf.width() as i64 + buf.height() as i64);

    if steps == 0 {
        buf.set_pixel(ax, ay, color, a.z.min(b.z));
        return;
    }

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = ax as f32 + dx as f32 * t;
        let y = ay as f32 + dy as f32 * t;
        let z = a.z + (b.z - a.z) * t;
        buf.set_pixel(x.round() as i32, y.round() as i32, color, z);
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(p: Vec3) -> u8 {
    let mut code = 0;
    if p.x < -1.0 {
        code |= LEFT;
    } else if p.x > 1.0 {
        code |= RIGHT;
    }
    if p.y < -1.0 {
        code |= BOTTOM;
    } else if p.y > 1.0 {
        code |= TOP;
    }
    code
}

/// Cuts `a → b` to `[-1, 1]²` (Cohen–Sutherland). `None` when the segment
/// misses the square or is not finite.
fn clip_to_view(mut a: Vec3, mut b: Vec3) -> Option<(Vec3, Vec3)> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }

    // Each round pins one endpoint to one boundary; rounding can need a
    // second visit per boundary.
    for _ in 0..8 {
        let (ca, cb) = (outcode(a), outcode(b));
        if ca | cb == 0 {
            return Some((a, b));
        }
        if ca & cb != 0 {
            return None;
        }

        let code = if ca != 0 { ca } else { cb };
        let cut = if code & TOP != 0 {
            let mut p = lerp_at(a, b, a.y, b.y, 1.0);
            p.y = 1.0;
            p
        } else if code & BOTTOM != 0 {
            let mut p = lerp_at(a, b, a.y, b.y, -1.0);
            p.y = -1.0;
            p
        } else if code & RIGHT != 0 {
            let mut p = lerp_at(a, b, a.x, b.x, 1.0);
            p.x = 1.0;
            p
        } else {
            let mut p = lerp_at(a, b, a.x, b.x, -1.0);
            p.x = -1.0;
            p
        };

        if code == ca {
            a = cut;
        } else {
            b = cut;
        }
    }

    let clamp = |p: Vec3| Vec3::new(p.x.clamp(-1.0, 1.0), p.y.clamp(-1.0, 1.0), p.z);
    Some((clamp(a), clamp(b)))
}

/// Point of `a → b` where the coordinate going from `va` to `vb` equals
/// `bound`. Computed in f64 so spans near `f32::MAX` don't overflow.
fn lerp_at(a: Vec3, b: Vec3, va: f32, vb: f32, bound: f32) -> Vec3 {
    let t = (bound as f64 - va as f64) / (vb as f64 - va as f64);
    let mix = |u: f32, v: f32| (u as f64 + (v as f64 - u as f64) * t) as f32;
    Vec3::new(mix(a.x, b.x), mix(a.y, b.y), mix(a.z, b.z))
}

/// Draws a `(2r + 1)`-pixel square centered on the NDC point `p`.
pub fn draw_point(buf: &mut DepthBuffer, p: Vec3, radius: i32, color: Color) {
    let (cx, cy) = buf.ndc_to_pixel(p.x, p.y);
    let radius = radius.max(0);

    let left = cx.saturating_sub(radius).max(0);
    let right = cx.saturating_add(radius).min(buf.width() - 1);
    let bottom = cy.saturating_sub(radius).max(0);
    let top = cy.saturating_add(radius).min(buf.height() - 1);

    for y in bottom..=top {
        for x in left..=right {
            buf.set_pixel(x, y, color, p.z);
        }
    }
}
