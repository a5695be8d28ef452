//! Player input systems (ECS)
//!
//! PlayerInputEvent / PlayerActionEvent → LocomotionInput + intents.
//! Query: With<Player> (только player-controlled entity).
//!
//! Gating (defending, grounded, ControllerActive) здесь НЕ делаем -
//! это решает locomotion (`process_action_intents`).

use bevy::prelude::*;
use vanguard_simulation::{AttackIntent, DodgeIntent, JumpIntent, LocomotionInput, Player};

use super::events::{PlayerActionEvent, PlayerInputEvent};

/// Held input → LocomotionInput (последний event за frame побеждает)
pub fn process_player_input(
    mut input_events: EventReader<PlayerInputEvent>,
    mut player_query: Query<&mut LocomotionInput, With<Player>>,
) {
    let Some(event) = input_events.read().last().copied() else {
        return;
    };

    for mut input in player_query.iter_mut() {
        input.move_input = event.move_input;
        input.sprint = event.sprint;
        input.defend = event.defend;
    }
}

/// Triggered input → Jump/Attack/Dodge intents
///
/// Одинаковые actions за frame схлопываются: одно нажатие = один intent на player.
pub fn process_player_actions(
    mut action_events: EventReader<PlayerActionEvent>,
    mut jump_events: EventWriter<JumpIntent>,
    mut attack_events: EventWriter<AttackIntent>,
    mut dodge_events: EventWriter<DodgeIntent>,
    player_query: Query<Entity, With<Player>>,
) {
    let mut fired: Vec<PlayerActionEvent> = Vec::with_capacity(PlayerActionEvent::ALL.len());
    for action in action_events.read() {
        if !fired.contains(action) {
            fired.push(*action);
        }
    }

    for action in fired {
        for entity in player_query.iter() {
            match action {
                PlayerActionEvent::Jump => {
                    jump_events.write(JumpIntent { entity });
                }
                PlayerActionEvent::Attack => {
                    attack_events.write(AttackIntent { entity });
                }
                PlayerActionEvent::Dodge => {
                    dodge_events.write(DodgeIntent { entity });
                }
            }
        }
    }
}
