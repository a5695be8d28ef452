//! Конвертация координат simulation ↔ Godot
//!
//! Simulation: forward = +Z, yaw по часовой от +Z (если смотреть сверху).
//! Godot: forward = -Z, rotation.y против часовой.
//!
//! Отсюда:
//! - yaw: godot = -sim
//! - вектор: flip Z
//! - `Input.get_vector(..)`: y = -1 это "вперёд", в simulation forward = +1 → flip Y

use bevy::prelude::{Vec2, Vec3};
use godot::prelude::{Vector2, Vector3};

pub fn sim_yaw_to_godot(yaw_degrees: f32) -> f32 {
    -yaw_degrees
}

pub fn godot_yaw_to_sim(yaw_degrees: f32) -> f32 {
    -yaw_degrees
}

pub fn sim_to_godot_vector(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, -v.z)
}

pub fn godot_move_to_sim(v: Vector2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}
