//! Physics module
//!
//! Headless kinematic host через Rapier (в игре физику делает Godot).

pub mod kinematic;

// Re-export основных типов
pub use kinematic::{
    spawn_ground,
    spawn_kinematic_character,
    KinematicHostPlugin,
};
