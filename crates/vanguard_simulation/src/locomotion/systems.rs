//! Locomotion ECS systems
//!
//! Update chain (порядок важен):
//! 1. `clear_command_buffers` - новый frame, старые команды хост уже забрал
//! 2. `process_action_intents` - jump/attack/dodge, пришедшие между tick'ами
//! 3. `tick_locomotion` - gravity → movement → defense → isGrounded
//!
//! Delta time берём из `TickDelta` (хост кладёт перед `app.update()`),
//! а не из `Time`: Godot сам решает длину frame.

use bevy::prelude::*;

use super::commands::LocomotionCommands;
use super::config::LocomotionConfig;
use super::events::{AttackIntent, DodgeIntent, JumpIntent};
use super::input::LocomotionInput;
use super::state::MotionState;
use super::update;
use crate::logger;

/// Elapsed секунды текущего host frame
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TickDelta(pub f32);

impl Default for TickDelta {
    fn default() -> Self {
        Self(1.0 / 60.0)
    }
}

/// Marker: контроллер включён и подписан на action events
///
/// Scoped subscription:
/// - Godot host: marker синхронизируется с node (inside tree + can_process)
/// - Intent для entity БЕЗ marker'а отбрасывается (нет "висячих" handlers)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ControllerActive;

/// Система: очистка буферов команд в начале frame
pub fn clear_command_buffers(mut buffers: Query<&mut LocomotionCommands>) {
    for mut buffer in buffers.iter_mut() {
        buffer.clear();
    }
}

/// Система: discrete action events → updater handlers
pub fn process_action_intents(
    mut jump_events: EventReader<JumpIntent>,
    mut attack_events: EventReader<AttackIntent>,
    mut dodge_events: EventReader<DodgeIntent>,
    mut controllers: Query<
        (&LocomotionConfig, &LocomotionInput, &mut MotionState, &mut LocomotionCommands),
        With<ControllerActive>,
    >,
) {
    for event in jump_events.read() {
        let Ok((config, input, mut state, mut out)) = controllers.get_mut(event.entity) else {
            logger::log(&format!("JumpIntent dropped: {:?} has no active controller", event.entity));
            continue;
        };

        if update::on_jump(&mut state, config, input.grounded, &mut out) {
            logger::log(&format!(
                "Entity {:?}: jump! vertical_velocity = {:.3} m/s",
                event.entity, state.vertical_velocity
            ));
        }
    }

    for event in attack_events.read() {
        let Ok((_, _, state, mut out)) = controllers.get_mut(event.entity) else {
            logger::log(&format!("AttackIntent dropped: {:?} has no active controller", event.entity));
            continue;
        };

        update::on_attack(&state, &mut out);
    }

    for event in dodge_events.read() {
        let Ok((_, input, state, mut out)) = controllers.get_mut(event.entity) else {
            logger::log(&format!("DodgeIntent dropped: {:?} has no active controller", event.entity));
            continue;
        };

        update::on_dodge(&state, input.grounded, &mut out);
    }
}

/// Система: per-tick locomotion update для всех активных контроллеров
pub fn tick_locomotion(
    mut controllers: Query<
        (Entity, &LocomotionConfig, &LocomotionInput, &mut MotionState, &mut LocomotionCommands),
        With<ControllerActive>,
    >,
    delta: Res<TickDelta>,
) {
    for (entity, config, input, mut state, mut out) in controllers.iter_mut() {
        let was_defending = state.is_defending;

        update::tick(&mut state, config, input, delta.0, &mut out);

        if state.is_defending != was_defending {
            logger::log(&format!("Entity {:?}: isDefending = {}", entity, state.is_defending));
        }
    }
}
