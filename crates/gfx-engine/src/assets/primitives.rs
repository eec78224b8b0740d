use crate::math::{Mesh, Triangle, Vec3};

/// Unit cube centered at `(0, 0, 2)`, two triangles per face.
pub fn cube() -> Mesh {
    const NEAR: f32 = 1.5;
    const FAR: f32 = 2.5;
    const H: f32 = 0.5;

    let v = Vec3::new;
    let quad = |a: Vec3, b: Vec3, c: Vec3, d: Vec3| [Triangle::new(a, b, c), Triangle::new(a, c, d)];

    let faces = [
        // front
        quad(v(-H, -H, NEAR), v(-H, H, NEAR), v(H, H, NEAR), v(H, -H, NEAR)),
        // back
        quad(v(H, -H, FAR), v(H, H, FAR), v(-H, H, FAR), v(-H, -H, FAR)),
        // left
        quad(v(-H, -H, FAR), v(-H, H, FAR), v(-H, H, NEAR), v(-H, -H, NEAR)),
        // right
        quad(v(H, -H, NEAR), v(H, H, NEAR), v(H, H, FAR), v(H, -H, FAR)),
        // top
        quad(v(-H, H, NEAR), v(-H, H, FAR), v(H, H, FAR), v(H, H, NEAR)),
        // bottom
        quad(v(-H, -H, FAR), v(-H, -H, NEAR), v(H, -H, NEAR), v(H, -H, FAR)),
    ];

    Mesh::new(faces.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_triangles() {
        assert_eq!(cube().len(), 12);
    }

    #[test]
    fn normals_point_outward() {
        let center = Vec3::new(0.0, 0.0, 2.0);
        for tr in cube().triangles {
            let [p1, p2, p3] = tr.points;
            let centroid = (p1 + p2 + p3) / 3.0;
            assert!(tr.face_normal().dot(centroid - center) > 0.0, "{tr:?}");
        }
    }
}
