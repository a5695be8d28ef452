//! PlayerBody - Godot node персонажа
//!
//! Физика (sweep, step-up, is_on_floor) - CharacterBody3D.
//! Решения (gravity, поворот, gating атак) - ECS locomotion.
//!
//! # Setup
//! - CharacterBody3D + CollisionShape3D (capsule)
//! - `animation_tree`: AnimationTree с параметрами Speed / isGrounded / isDefending
//!   и OneShot нодами Jump / Attack / Dodge
//! - `camera`: Node3D камеры (или её pivot) - yaw берётся отсюда
//! - Выключение ноды (process_mode = DISABLED) снимает ControllerActive

use godot::classes::{AnimationTree, CharacterBody3D, ICharacterBody3D};
use godot::prelude::*;
use vanguard_simulation::LocomotionConfig;

#[derive(GodotClass)]
#[class(base=CharacterBody3D)]
pub struct PlayerBody {
    /// Скорость ходьбы (m/s)
    #[export]
    pub walk_speed: f32,
    /// Скорость бега (m/s)
    #[export]
    pub sprint_speed: f32,
    /// Время сглаживания поворота (сек)
    #[export]
    pub rotation_smooth_time: f32,
    /// Гравитация (m/s², отрицательная)
    #[export]
    pub gravity: f32,
    /// Высота прыжка (m)
    #[export]
    pub jump_height: f32,

    #[export]
    pub animation_tree: Option<Gd<AnimationTree>>,
    #[export]
    pub camera: Option<Gd<Node3D>>,

    base: Base<CharacterBody3D>,
}

#[godot_api]
impl ICharacterBody3D for PlayerBody {
    fn init(base: Base<CharacterBody3D>) -> Self {
        let defaults = LocomotionConfig::default();

        Self {
            walk_speed: defaults.walk_speed,
            sprint_speed: defaults.sprint_speed,
            rotation_smooth_time: defaults.rotation_smooth_time,
            gravity: defaults.gravity,
            jump_height: defaults.jump_height,
            animation_tree: None,
            camera: None,
            base,
        }
    }

    fn ready(&mut self) {
        if self.animation_tree.is_none() {
            vanguard_simulation::log_warning("PlayerBody: animation_tree not set - animation parameters will be skipped");
        }
        if self.camera.is_none() {
            vanguard_simulation::log_warning("PlayerBody: camera not set - movement will use world axes");
        }
    }
}

impl PlayerBody {
    /// Inspector значения → ECS config (без валидации)
    pub fn locomotion_config(&self) -> LocomotionConfig {
        LocomotionConfig {
            walk_speed: self.walk_speed,
            sprint_speed: self.sprint_speed,
            rotation_smooth_time: self.rotation_smooth_time,
            gravity: self.gravity,
            jump_height: self.jump_height,
        }
    }
}
