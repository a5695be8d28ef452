//! Headless kinematic host на Rapier
//!
//! Заменяет Godot CharacterBody3D когда симуляция крутится без движка
//! (CLI, интеграционные прогоны):
//! - Rapier `KinematicCharacterController` делает sweep/slide/snap-to-ground
//! - grounded берём из `KinematicCharacterControllerOutput`
//! - yaw пишем прямо в Transform
//!
//! Frame:
//! ```text
//! sync_host_state (Update, до LocomotionSet)
//!     ↓
//! LocomotionSet (clear → intents → tick)
//!     ↓
//! apply_locomotion_commands (Update, после LocomotionSet)
//!     ↓
//! Rapier step (PostUpdate) → KinematicCharacterControllerOutput
//! ```

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::animation::AnimatorParameters;
use crate::locomotion::{
    last_yaw, locomotion_bundle, sum_move_deltas, LocomotionCommands, LocomotionConfig, LocomotionInput,
    LocomotionSet, TickDelta,
};
use crate::player::Player;

/// Capsule персонажа: полувысота цилиндра + радиус (итого 1.8m)
pub const CAPSULE_HALF_HEIGHT: f32 = 0.5;
pub const CAPSULE_RADIUS: f32 = 0.4;

/// Система: host state → LocomotionInput (grounded + текущий yaw)
///
/// Output появляется только после первого rapier step → до этого не на земле.
pub fn sync_host_state(
    mut query: Query<(&Transform, Option<&KinematicCharacterControllerOutput>, &mut LocomotionInput)>,
) {
    for (transform, output, mut input) in query.iter_mut() {
        input.grounded = output.is_some_and(|output| output.grounded);
        input.facing_yaw = transform_yaw(transform);
    }
}

/// Система: LocomotionCommands → Rapier controller + Transform + animation bag
///
/// Все Move за frame суммируются в один translation (один sweep).
pub fn apply_locomotion_commands(
    mut query: Query<(
        &mut LocomotionCommands,
        &mut KinematicCharacterController,
        &mut Transform,
        &mut AnimatorParameters,
    )>,
    delta: Res<TickDelta>,
) {
    for (mut buffer, mut controller, mut transform, mut animator) in query.iter_mut() {
        let commands = buffer.drain();

        controller.translation = Some(sum_move_deltas(&commands));

        if let Some(yaw) = last_yaw(&commands) {
            transform.rotation = yaw_rotation(yaw);
        }

        animator.apply_all(&commands, delta.0);
    }
}

/// Yaw (градусы, по часовой от +Z) → Bevy rotation
///
/// Поворот вокруг +Y на θ переводит +Z в (sin θ, 0, cos θ) - совпадает с `yaw_to_forward`.
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(yaw_degrees.to_radians())
}

/// Bevy rotation → yaw (градусы)
pub fn transform_yaw(transform: &Transform) -> f32 {
    let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
    yaw.to_degrees()
}

/// Plugin headless хоста (Rapier plugin добавляется отдельно вызывающим)
pub struct KinematicHostPlugin;

impl Plugin for KinematicHostPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_host_state.before(LocomotionSet),
                apply_locomotion_commands.after(LocomotionSet),
            ),
        );
    }
}

/// Spawn helper для kinematic персонажа
///
/// Создает entity с полным набором компонентов:
/// - Transform
/// - Locomotion (config, state, input, command buffer, ControllerActive)
/// - AnimatorParameters
/// - Rapier: KinematicPositionBased + capsule + KinematicCharacterController
pub fn spawn_kinematic_character(commands: &mut Commands, position: Vec3, config: LocomotionConfig) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Player,
            locomotion_bundle(config),
            AnimatorParameters::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            KinematicCharacterController {
                snap_to_ground: Some(CharacterLength::Absolute(0.2)),
                ..default()
            },
        ))
        .id()
}

/// Плоский пол 100x100m, верхняя грань на y = 0
pub fn spawn_ground(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Transform::from_xyz(0.0, -0.5, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(50.0, 0.5, 50.0),
        ))
        .id()
}
