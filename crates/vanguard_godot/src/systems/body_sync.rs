//! Body sync systems - Godot CharacterBody3D ↔ ECS locomotion
//!
//! Frame (Update):
//! ```text
//! sync_controller_activity_main_thread  (node enabled? → ControllerActive, freed → BodyFreed)
//! despawn_freed_bodies_main_thread      (BodyFreed → despawn + registry cleanup)
//! sync_body_state_main_thread           (is_on_floor, yaw, camera yaw → LocomotionInput)
//! process_player_input / actions        (held input + intents, см. crate::input)
//!     ↓
//! LocomotionSet                         (clear → intents → tick)
//!     ↓
//! apply_locomotion_commands_main_thread (Move → move_and_slide, SetYaw, AnimationTree)
//! ```
//!
//! Main thread only (Godot API).

use bevy::prelude::*;
use godot::prelude::*;
use vanguard_simulation::{last_yaw, sum_move_deltas, AnimatorParameters, ControllerActive, LocomotionCommands, LocomotionInput, TickDelta};

use super::BodyRegistry;
use crate::animation::push_animation_parameters;
use crate::coords::{godot_yaw_to_sim, sim_to_godot_vector, sim_yaw_to_godot};

/// Body node освобождён (queue_free) - entity больше не нужна
#[derive(Event, Debug, Clone, Copy)]
pub struct BodyFreed {
    pub entity: Entity,
}

/// Scoped subscription: контроллер активен пока node в дереве и процессится
///
/// process_mode = DISABLED / node вынут из дерева → ControllerActive снимается,
/// intents для entity отбрасываются. Включили обратно → marker возвращается.
/// Node освобождён → BodyFreed (despawn в `despawn_freed_bodies_main_thread`).
pub fn sync_controller_activity_main_thread(
    mut commands: Commands,
    query: Query<(Entity, Has<ControllerActive>), With<LocomotionInput>>,
    registry: NonSend<BodyRegistry>,
    mut freed_events: EventWriter<BodyFreed>,
) {
    for (entity, active) in query.iter() {
        let Some(handles) = registry.bodies.get(&entity) else {
            continue;
        };

        if !handles.body.is_instance_valid() {
            freed_events.write(BodyFreed { entity });
            continue;
        }

        let enabled = handles.body.is_inside_tree() && handles.body.can_process();

        if enabled == active {
            continue;
        }

        if enabled {
            commands.entity(entity).insert(ControllerActive);
        } else {
            commands.entity(entity).remove::<ControllerActive>();
        }

        vanguard_simulation::log(&format!("Entity {:?}: controller active = {}", entity, enabled));
    }
}

/// BodyFreed → despawn entity + убрать handles из registry
pub fn despawn_freed_bodies_main_thread(
    mut commands: Commands,
    mut freed_events: EventReader<BodyFreed>,
    mut registry: NonSendMut<BodyRegistry>,
) {
    for event in freed_events.read() {
        registry.bodies.remove(&event.entity);

        // try_despawn: повторный BodyFreed в том же frame не должен паниковать
        if let Ok(mut entity) = commands.get_entity(event.entity) {
            entity.try_despawn();
            vanguard_simulation::log(&format!("Entity {:?}: body freed, despawned", event.entity));
        }
    }
}

/// Host state → LocomotionInput (grounded, текущий yaw тела, yaw камеры)
pub fn sync_body_state_main_thread(
    mut query: Query<(Entity, &mut LocomotionInput), With<ControllerActive>>,
    registry: NonSend<BodyRegistry>,
) {
    for (entity, mut input) in query.iter_mut() {
        let Some(handles) = registry.bodies.get(&entity) else {
            continue;
        };

        input.grounded = handles.body.is_on_floor();
        input.facing_yaw = godot_yaw_to_sim(handles.body.get_rotation_degrees().y);
        input.camera_yaw = handles
            .camera
            .as_ref()
            .map(|camera| godot_yaw_to_sim(camera.get_global_rotation_degrees().y))
            .unwrap_or(0.0);
    }
}

/// LocomotionCommands → CharacterBody3D + AnimationTree
///
/// Все Move за frame суммируются: velocity = displacement / delta,
/// move_and_slide() вызывается из process → Godot берёт тот же process delta.
///
/// КРИТИЧНО: move_and_slide() каждый frame, даже с нулевым смещением,
/// иначе is_on_floor() не обновляется.
pub fn apply_locomotion_commands_main_thread(
    mut query: Query<(Entity, &mut LocomotionCommands, &mut AnimatorParameters)>,
    registry: NonSend<BodyRegistry>,
    delta: Res<TickDelta>,
) {
    let dt = delta.0;

    for (entity, mut buffer, mut animator) in query.iter_mut() {
        let Some(handles) = registry.bodies.get(&entity) else {
            continue;
        };

        let commands = buffer.drain();
        if commands.is_empty() {
            continue;
        }

        let mut body = handles.body.clone();

        if dt > 0.0 {
            let displacement = sum_move_deltas(&commands);
            body.set_velocity(sim_to_godot_vector(displacement / dt));
            body.move_and_slide();
        }

        if let Some(yaw) = last_yaw(&commands) {
            let rotation = body.get_rotation_degrees();
            body.set_rotation_degrees(Vector3::new(rotation.x, sim_yaw_to_godot(yaw), rotation.z));
        }

        animator.apply_all(&commands, dt);
        let triggers = animator.take_triggers();

        if let Some(tree) = handles.animation_tree.clone() {
            push_animation_parameters(tree, &animator, &triggers);
        }
    }
}
