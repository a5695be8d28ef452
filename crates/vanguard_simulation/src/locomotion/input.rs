//! Per-tick input от хоста (Godot / headless rapier host)

use bevy::prelude::*;

/// Held input + host state на текущий tick
///
/// Пишется хостом каждый frame ДО `app.update()`, updater только читает.
///
/// # Coordinate System
/// Host-независимая система (yaw по часовой от +Z, forward = +Z):
/// - `move_input.x`: -1.0 (left) → +1.0 (right)
/// - `move_input.y`: -1.0 (back) → +1.0 (forward)
/// - `camera_yaw` / `facing_yaw`: градусы
///
/// Конвертация в Godot - `vanguard_godot::coords`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionInput {
    /// Stick / WASD (не обязательно normalized)
    pub move_input: Vec2,
    /// Sprint held
    pub sprint: bool,
    /// Defend held
    pub defend: bool,
    /// Хост сообщает: capsule стоит на walkable поверхности
    pub grounded: bool,
    /// Yaw камеры (градусы)
    pub camera_yaw: f32,
    /// Текущий yaw тела персонажа (градусы)
    pub facing_yaw: f32,
}
