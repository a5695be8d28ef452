//! Player spawn helper
//!
//! Утилиты для spawn player entity в ECS world.

use bevy::prelude::*;
use godot::classes::CharacterBody3D;
use godot::prelude::*;
use vanguard_simulation::{locomotion_bundle, AnimatorParameters, Player};

use super::body::PlayerBody;
use crate::systems::{BodyHandles, BodyRegistry};

/// Spawn player entity в ECS world и регистрирует Godot handles
///
/// # Компоненты
/// - Player marker
/// - Locomotion (config из inspector, state, input, command buffer, ControllerActive)
/// - AnimatorParameters
///
/// # Returns
/// Entity ID созданного player
pub fn spawn_player_entity(world: &mut World, body: Gd<PlayerBody>) -> Entity {
    let (config, animation_tree, camera) = {
        let player = body.bind();
        (player.locomotion_config(), player.animation_tree.clone(), player.camera.clone())
    };

    let entity = world
        .spawn((Player, locomotion_bundle(config), AnimatorParameters::default()))
        .id();

    world.non_send_resource_mut::<BodyRegistry>().bodies.insert(
        entity,
        BodyHandles {
            body: body.upcast::<CharacterBody3D>(),
            animation_tree,
            camera,
        },
    );

    vanguard_simulation::log(&format!("Player spawned: {:?} ({:?})", entity, config));

    entity
}
