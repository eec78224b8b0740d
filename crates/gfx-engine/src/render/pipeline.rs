use crate::math::{Mat3, Triangle, Vec3};
use crate::scene::Scene;

use super::{draw_line, draw_point, fill_triangle, DepthBuffer, Frustum, RenderSettings};

/// Renders `scene` into a fresh `width × height` buffer.
pub fn render_scene(scene: &Scene, width: i32, height: i32, settings: &RenderSettings) -> DepthBuffer {
    let palette = &settings.palette;
    let mut buf = DepthBuffer::new(width, height, palette.background);
    if buf.width() == 0 || buf.height() == 0 {
        return buf;
    }

    let camera = &scene.camera;
    let aspect = buf.aspect();
    let world_to_view = camera.orientation().transpose();

    let mut triangles = Vec::with_capacity(scene.triangle_count());
    for object in &scene.objects {
        let model = object.model_rotation();
        for tr in &object.mesh.triangles {
            let world = tr.transformed(model, object.position);
            let view = world.points.map(|p| camera.to_view(world_to_view, p));
            if !view.iter().all(|p| p.is_finite()) {
                continue;
            }
            triangles.push(Triangle::with_normal(view, Some(world.face_normal())));
        }
    }

    let submitted = triangles.len();
    let triangles = Frustum::new(camera, aspect).clip(triangles);

    let to_light = -(Mat3::rotation(scene.light_rotation) * Vec3::forward());
    let projection = camera.projection(aspect);

    for tr in &triangles {
        let intensity = tr.normal.map_or(0.0, |n| to_light.dot(n));
        let color = palette.shadow.lerp(palette.model, intensity);

        // Clipping very large triangles can overflow.
        let ndc = tr.points.map(|p| projection.project(p));
        if !ndc.iter().all(|p| p.is_finite()) {
            continue;
        }
        fill_triangle(&mut buf, ndc, color);

        if settings.wireframe {
            let [a, b, c] = ndc;
            draw_line(&mut buf, a, b, palette.wire_line);
            draw_line(&mut buf, b, c, palette.wire_line);
            draw_line(&mut buf, c, a, palette.wire_line);
            for p in ndc {
                draw_point(&mut buf, p, settings.point_radius, palette.wire_point);
            }
        }
    }

    log::trace!(
        "rendered {}x{}: {} triangles submitted, {} after clipping",
        width,
        height,
        submitted,
        triangles.len()
    );

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::cube;
    use crate::math::Mesh;
    use crate::paint::Color;

    fn settings(wireframe: bool) -> RenderSettings {
        RenderSettings { wireframe, ..RenderSettings::default() }
    }

    fn count(buf: DepthBuffer, color: Color) -> usize {
        buf.into_colors().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn output_has_one_texel_per_pixel() {
        let scene = Scene::new(cube());
        let out = render_scene(&scene, 64, 48, &settings(true)).into_colors();
        assert_eq!(out.len(), 64 * 48);
    }

    #[test]
    fn empty_scene_is_background() {
        let scene = Scene::new(Mesh::default());
        let bg = RenderSettings::default().palette.background;
        assert_eq!(count(render_scene(&scene, 32, 32, &settings(true)), bg), 32 * 32);
    }

    #[test]
    fn cube_is_visible_in_the_middle() {
        let scene = Scene::new(cube());
        let bg = RenderSettings::default().palette.background;
        let buf = render_scene(&scene, 64, 64, &settings(false));
        assert_ne!(buf.color_at(28, 35), Some(bg));
        assert_eq!(buf.color_at(0, 0), Some(bg));
    }

    #[test]
    fn front_face_is_lit_by_default_light() {
        let scene = Scene::new(cube());
        let buf = render_scene(&scene, 64, 64, &settings(false));
        let palette = RenderSettings::default().palette;
        let c = buf.color_at(28, 35).unwrap();
        assert_ne!(c, palette.shadow);
        assert!(c.red > 100 && c.green > 100, "{c:?}");
    }

    #[test]
    fn wireframe_adds_line_pixels() {
        let scene = Scene::new(cube());
        let line = RenderSettings::default().palette.wire_line;
        assert_eq!(count(render_scene(&scene, 64, 64, &settings(false)), line), 0);
        assert!(count(render_scene(&scene, 64, 64, &settings(true)), line) > 0);
    }

    #[test]
    fn camera_turned_away_sees_nothing() {
        let mut scene = Scene::new(cube());
        scene.camera.rotation.y = 180.0;
        let bg = RenderSettings::default().palette.background;
        assert_eq!(count(render_scene(&scene, 32, 32, &settings(true)), bg), 32 * 32);
    }

    #[test]
    fn huge_and_infinite_coordinates_render_quickly() {
        let huge = Mesh::new(vec![Triangle::new(
            Vec3::new(1e38, 0.0, 1.0),
            Vec3::new(-1e38, 1e38, 1.0),
            Vec3::new(0.0, -1e38, 3.0),
        )]);
        let infinite = Mesh::new(vec![Triangle::new(
            Vec3::new(f32::INFINITY, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(0.0, -1.0, 2.0),
        )]);

        for mesh in [huge, infinite] {
            let started = std::time::Instant::now();
            let out = render_scene(&Scene::new(mesh), 64, 64, &settings(true)).into_colors();
            assert_eq!(out.len(), 64 * 64);
            assert!(started.elapsed() < std::time::Duration::from_secs(2));
        }
    }

    #[test]
    fn zero_sized_target_is_empty() {
        let scene = Scene::new(cube());
        assert!(render_scene(&scene, 0, 10, &settings(true)).into_colors().is_empty());
    }
}
