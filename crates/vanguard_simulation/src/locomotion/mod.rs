//! Locomotion domain - движение, гравитация, прыжок, combat-state gating
//!
//! Содержит:
//! - LocomotionConfig (tunables)
//! - MotionState (per-character state)
//! - LocomotionInput (held input + host state)
//! - JumpIntent / AttackIntent / DodgeIntent (triggered input)
//! - LocomotionCommands (команды хосту: Move, SetYaw, animation)
//! - update (чистая логика tick + handlers)
//!
//! # Архитектура
//!
//! ```text
//! Host (Godot / rapier) → LocomotionInput + *Intent events
//!     ↓
//! process_action_intents → tick_locomotion   (ECS, Update)
//!     ↓
//! LocomotionCommands → Host (move_and_slide, rotation, AnimationTree)
//! ```

pub mod commands;
pub mod config;
pub mod events;
pub mod input;
pub mod smoothing;
pub mod state;
pub mod systems;
pub mod update;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod update_tests;

pub use commands::*;
pub use config::*;
pub use events::*;
pub use input::*;
pub use state::*;
pub use systems::*;

use bevy::prelude::*;

/// Все компоненты контроллера для spawn одним bundle
pub fn locomotion_bundle(config: LocomotionConfig) -> impl Bundle {
    (
        config,
        MotionState::default(),
        LocomotionInput::default(),
        LocomotionCommands::default(),
        ControllerActive,
    )
}

/// Locomotion plugin (events + Update chain)
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpIntent>()
            .add_event::<AttackIntent>()
            .add_event::<DodgeIntent>()
            .init_resource::<TickDelta>()
            .register_type::<LocomotionConfig>()
            .register_type::<MotionState>()
            .register_type::<LocomotionInput>()
            .add_systems(
                Update,
                (clear_command_buffers, process_action_intents, tick_locomotion)
                    .chain()
                    .in_set(LocomotionSet),
            );
    }
}

/// SystemSet для упорядочивания host-систем относительно locomotion
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;
