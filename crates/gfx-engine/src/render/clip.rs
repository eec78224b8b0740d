use crate::math::{Mat3, Plane, Triangle, Vec3};
use crate::scene::Camera;

/// Clips `tr` against `plane`, appending 0, 1 or 2 triangles to `out`.
///
/// Winding and the world-space normal of `tr` are preserved.
pub fn clip_triangle(tr: &Triangle, plane: &Plane, out: &mut Vec<Triangle>) {
    let inside = tr.points.map(|p| plane.is_inside(p));
    let inside_count = inside.iter().filter(|&&b| b).count();

    match inside_count {
        0 => {}
        3 => out.push(*tr),
        1 => {
            // Rotate so the lone inside vertex comes first.
            let k = inside.iter().position(|&b| b).unwrap_or(0);
            let [a, b, c] = rotated(tr.points, k);
            let ab = plane.intersect_segment(a, b);
            let ac = plane.intersect_segment(a, c);
            out.push(Triangle::with_normal([a, ab, ac], tr.normal));
        }
        _ => {
            // Rotate so the lone outside vertex comes last.
            let k = inside.iter().position(|&b| !b).unwrap_or(0);
            let [a, b, c] = rotated(tr.points, (k + 1) % 3);
            let bc = plane.intersect_segment(b, c);
            let ca = plane.intersect_segment(c, a);
            out.push(Triangle::with_normal([a, b, bc], tr.normal));
            out.push(Triangle::with_normal([a, bc, ca], tr.normal));
        }
    }
}

/// Cyclic rotation starting at index `k`; winding is unchanged.
fn rotated(points: [Vec3; 3], k: usize) -> [Vec3; 3] {
    [points[k % 3], points[(k + 1) % 3], points[(k + 2) % 3]]
}

/// View frustum as six inward-facing planes in view space.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Near, far, left, right, bottom and top planes for `camera` rendering
    /// into a target with the given aspect ratio.
    pub fn new(camera: &Camera, aspect: f32) -> Self {
        let forward = Vec3::forward();

        let near = Plane::from_point_normal(Vec3::new(0.0, 0.0, camera.z_near), forward);
        let far = Plane::from_point_normal(Vec3::new(0.0, 0.0, camera.z_far), -forward);

        // Side planes pass through the eye; their normals are +Z tilted by the
        // complement of the half opening angle.
        let horizontal = 90.0 - camera.half_horizontal_fov(aspect);
        let vertical = 90.0 - camera.vertical_fov / 2.0;
        let side = |rotation: Mat3| Plane::from_point_normal(Vec3::zero(), rotation * forward);

        Self {
            planes: [
                near,
                far,
                side(Mat3::rotation_y(horizontal)),
                side(Mat3::rotation_y(-horizontal)),
                side(Mat3::rotation_x(-vertical)),
                side(Mat3::rotation_x(vertical)),
            ],
        }
    }

    /// Clips view-space triangles against every plane in turn.
    pub fn clip(&self, mut triangles: Vec<Triangle>) -> Vec<Triangle> {
        let mut scratch = Vec::with_capacity(triangles.len());
        for plane in &self.planes {
            scratch.clear();
            for tr in &triangles {
                clip_triangle(tr, plane, &mut scratch);
            }
            std::mem::swap(&mut triangles, &mut scratch);
        }
        triangles
    }

    pub fn contains(&self, p: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.is_inside(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_plane(z: f32) -> Plane {
        Plane::from_point_normal(Vec3::new(0.0, 0.0, z), Vec3::forward())
    }

    fn signed_area_z(tr: &Triangle) -> f32 {
        let [a, b, c] = tr.points;
        (b - a).cross(c - a).z
    }

    fn tri() -> Triangle {
        Triangle::with_normal(
            [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 2.0), Vec3::new(0.0, 1.0, 2.0)],
            Some(Vec3::new(0.0, 0.0, -1.0)),
        )
    }

    // ── clip_triangle ─────────────────────────────────────────────────────

    #[test]
    fn fully_inside_is_kept() {
        let mut out = Vec::new();
        clip_triangle(&tri(), &z_plane(-1.0), &mut out);
        assert_eq!(out, vec![tri()]);
    }

    #[test]
    fn fully_outside_is_dropped() {
        let mut out = Vec::new();
        clip_triangle(&tri(), &z_plane(3.0), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn one_inside_yields_one_triangle() {
        let mut out = Vec::new();
        // Only the vertex at z = 0 is behind a plane facing -Z at z = 1.
        let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 1.0), -Vec3::forward());
        clip_triangle(&tri(), &plane, &mut out);
        assert_eq!(out.len(), 1);
        assert!(out[0].points.iter().all(|&p| p.z <= 1.0 + 1e-6));
        assert_eq!(out[0].normal, tri().normal);
        assert!(signed_area_z(&out[0]) * signed_area_z(&tri()) > 0.0);
    }

    #[test]
    fn two_inside_yields_two_triangles() {
        let mut out = Vec::new();
        clip_triangle(&tri(), &z_plane(1.0), &mut out);
        assert_eq!(out.len(), 2);
        for t in &out {
            assert!(t.points.iter().all(|&p| p.z >= 1.0 - 1e-6));
            assert_eq!(t.normal, tri().normal);
            assert!(signed_area_z(t) * signed_area_z(&tri()) > 0.0);
        }
    }

    // ── frustum ───────────────────────────────────────────────────────────

    #[test]
    fn frustum_contains_center_of_view() {
        let f = Frustum::new(&Camera::default(), 1.0);
        assert!(f.contains(Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn frustum_rejects_behind_beyond_and_beside() {
        let f = Frustum::new(&Camera::default(), 1.0);
        assert!(!f.contains(Vec3::new(0.0, 0.0, 0.05)));
        assert!(!f.contains(Vec3::new(0.0, 0.0, 6.0)));
        // tan(30°) ≈ 0.577: at depth 1 the frustum spans |x|, |y| < 0.577.
        assert!(!f.contains(Vec3::new(0.7, 0.0, 1.0)));
        assert!(!f.contains(Vec3::new(-0.7, 0.0, 1.0)));
        assert!(!f.contains(Vec3::new(0.0, 0.7, 1.0)));
        assert!(!f.contains(Vec3::new(0.0, -0.7, 1.0)));
        assert!(f.contains(Vec3::new(0.5, -0.5, 1.0)));
    }

    #[test]
    fn clipped_geometry_stays_inside() {
        let f = Frustum::new(&Camera::default(), 1.5);
        let big = Triangle::new(
            Vec3::new(-10.0, -10.0, 2.0),
            Vec3::new(10.0, -10.0, 2.0),
            Vec3::new(0.0, 10.0, 2.0),
        );
        let clipped = f.clip(vec![big]);
        assert!(!clipped.is_empty());
        for tr in clipped {
            for p in tr.points {
                assert!(f.planes.iter().all(|pl| pl.signed_distance(p) > -1e-4), "{p:?}");
            }
        }
    }
}
