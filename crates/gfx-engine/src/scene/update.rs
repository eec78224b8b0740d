use crate::input::{Controls, InputModifiers, UserInput};
use crate::math::Vec3;

use super::Scene;

/// Camera speed in world units per second.
const MOVE_SPEED: f32 = 0.5;
/// Camera yaw speed in degrees per second.
const TURN_SPEED: f32 = 15.0;
const MOVE_BOOST: f32 = 2.5;
const TURN_BOOST: f32 = 5.0;
/// Light yaw speed in degrees per second.
const LIGHT_SPEED: f32 = 90.0;

/// Advances the scene by `dt` seconds.
pub fn update_scene(scene: &mut Scene, controls: &Controls, dt: f32) {
    let camera = &mut scene.camera;

    let offset = camera.orientation() * movement_dir(&controls.movement, &controls.modifiers);
    camera.position += offset * (MOVE_SPEED * dt);

    camera.rotation += rotation_dir(&controls.movement, &controls.modifiers) * (TURN_SPEED * dt);

    scene.light_rotation.y += LIGHT_SPEED * dt;
}

/// Opposing keys cancel out.
fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

fn movement_dir(input: &UserInput, mods: &InputModifiers) -> Vec3 {
    let mut dir = Vec3::new(
        0.0,
        axis(mods.e_pressed, mods.q_pressed),
        axis(input.w_pressed, input.s_pressed),
    );
    if mods.shift_pressed {
        dir *= MOVE_BOOST;
    }
    dir
}

fn rotation_dir(input: &UserInput, mods: &InputModifiers) -> Vec3 {
    let mut dir = Vec3::new(0.0, axis(input.d_pressed, input.a_pressed), 0.0);
    if mods.shift_pressed {
        dir *= TURN_BOOST;
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::cube;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn controls(f: impl FnOnce(&mut UserInput, &mut InputModifiers)) -> Controls {
        let mut c = Controls::IDLE;
        f(&mut c.movement, &mut c.modifiers);
        c
    }

    #[test]
    fn idle_only_moves_the_light() {
        let mut scene = Scene::new(cube());
        let before = scene.camera;
        update_scene(&mut scene, &Controls::IDLE, 0.5);
        assert_eq!(scene.camera, before);
        assert!((scene.light_rotation.y - 45.0).abs() < 1e-5);
    }

    #[test]
    fn forward_moves_along_view_direction() {
        let mut scene = Scene::new(cube());
        update_scene(&mut scene, &controls(|i, _| i.w_pressed = true), 1.0);
        assert!(approx(scene.camera.position, Vec3::new(0.0, 0.0, -0.5)));
    }

    #[test]
    fn forward_follows_yaw() {
        let mut scene = Scene::new(cube());
        scene.camera.rotation.y = 90.0;
        update_scene(&mut scene, &controls(|i, _| i.w_pressed = true), 2.0);
        assert!(approx(scene.camera.position, Vec3::new(1.0, 0.0, -1.0)));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut scene = Scene::new(cube());
        let c = controls(|i, m| {
            i.w_pressed = true;
            i.s_pressed = true;
            i.a_pressed = true;
            i.d_pressed = true;
            m.q_pressed = true;
            m.e_pressed = true;
        });
        let before = scene.camera;
        update_scene(&mut scene, &c, 1.0);
        assert_eq!(scene.camera, before);
    }

    #[test]
    fn shift_boosts_turning() {
        let mut scene = Scene::new(cube());
        update_scene(&mut scene, &controls(|i, m| {
            i.d_pressed = true;
            m.shift_pressed = true;
        }), 1.0);
        assert!((scene.camera.rotation.y - 75.0).abs() < 1e-4);

        update_scene(&mut scene, &controls(|i, _| i.a_pressed = true), 1.0);
        assert!((scene.camera.rotation.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn q_and_e_move_vertically() {
        let mut scene = Scene::new(cube());
        update_scene(&mut scene, &controls(|_, m| m.e_pressed = true), 1.0);
        assert!(approx(scene.camera.position, Vec3::new(0.0, 0.5, -1.0)));

        update_scene(&mut scene, &controls(|_, m| {
            m.q_pressed = true;
            m.shift_pressed = true;
        }), 1.0);
        assert!(approx(scene.camera.position, Vec3::new(0.0, -0.75, -1.0)));
    }
}
