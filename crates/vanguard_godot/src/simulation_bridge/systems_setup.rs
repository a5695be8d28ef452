//! ECS systems registration
//!
//! Регистрация Godot-side систем вокруг `LocomotionSet` (Update).

use bevy::prelude::*;
use vanguard_simulation::LocomotionSet;

/// Регистрация всех ECS систем в Bevy App
pub fn register_systems(app: &mut App) {
    use crate::input::{process_player_actions, process_player_input, PlayerActionEvent, PlayerInputEvent};
    use crate::systems::{
        BodyFreed,
        apply_locomotion_commands_main_thread,
        despawn_freed_bodies_main_thread,
        sync_body_state_main_thread,
        sync_controller_activity_main_thread,
    };

    // 1. Регистрируем Godot input events
    app.add_event::<PlayerInputEvent>(); // Held input (каждый frame)
    app.add_event::<PlayerActionEvent>(); // Jump/Attack/Dodge
    app.add_event::<BodyFreed>(); // PlayerBody освобождён → despawn

    // 2. ДО locomotion: host state + input → LocomotionInput / intents
    // ВАЖНО: activity первой - иначе intents этого frame'а проверятся по старому marker'у
    app.add_systems(
        Update,
        (
            sync_controller_activity_main_thread, // node enabled → ControllerActive
            despawn_freed_bodies_main_thread,     // freed body → despawn + registry cleanup
            sync_body_state_main_thread,          // is_on_floor, yaw, camera yaw
            process_player_input,                 // held: move/sprint/defend
            process_player_actions,               // triggered: jump/attack/dodge → intents
        )
            .chain()
            .before(LocomotionSet),
    );

    // 3. ПОСЛЕ locomotion: команды → CharacterBody3D + AnimationTree
    app.add_systems(Update, apply_locomotion_commands_main_thread.after(LocomotionSet));
}
