//! PlayerInputController - Godot node для чтения player input
//!
//! Архитектура:
//! - Godot Node (child of SimulationBridge)
//! - Held actions (move/sprint/defend) читаются в process() каждый frame
//! - Triggered actions (jump/attack/dodge) приходят через unhandled_input()
//! - Всё пробрасывается в ECS через SimulationBridge
//!
//! process_priority = -1: отрабатываем ДО SimulationBridge::process(),
//! input попадает в ECS в том же frame.

use godot::classes::{INode, Input, InputEvent, Node};
use godot::prelude::*;

use super::events::{PlayerActionEvent, PlayerInputEvent};
use crate::coords::godot_move_to_sim;
use crate::simulation_bridge::SimulationBridge;

/// PlayerInputController - читает Godot Input и emit ECS events
///
/// # Setup
/// - Spawn как child node SimulationBridge (SimulationBridge::spawn_player)
#[derive(GodotClass)]
#[class(base=Node)]
pub struct PlayerInputController {
    /// Путь к SimulationBridge (для emit events)
    /// Устанавливается при spawn player
    #[var]
    pub simulation_bridge_path: NodePath,

    base: Base<Node>,
}

#[godot_api]
impl INode for PlayerInputController {
    fn init(base: Base<Node>) -> Self {
        Self {
            simulation_bridge_path: NodePath::from(""),
            base,
        }
    }

    fn ready(&mut self) {
        self.base_mut().set_process_priority(-1);
        vanguard_simulation::log("PlayerInputController ready");
    }

    fn process(&mut self, _delta: f64) {
        // Guard: SimulationBridge path не установлен (player ещё не spawned)
        if self.simulation_bridge_path.is_empty() {
            return;
        }

        let input = Input::singleton();

        // get_vector уже clamp'ит длину до 1 и учитывает deadzone
        let move_vector = input.get_vector("move_left", "move_right", "move_forward", "move_back");

        let event = PlayerInputEvent {
            move_input: godot_move_to_sim(move_vector),
            sprint: input.is_action_pressed("sprint"),
            defend: input.is_action_pressed("defend"),
        };

        if let Some(mut bridge) = self.bridge() {
            bridge.bind_mut().emit_player_input_event(event);
        }
    }

    fn unhandled_input(&mut self, event: Gd<InputEvent>) {
        if self.simulation_bridge_path.is_empty() {
            return;
        }

        for action in PlayerActionEvent::ALL {
            if !event.is_action_pressed(action.action_name()) {
                continue;
            }

            if let Some(mut bridge) = self.bridge() {
                bridge.bind_mut().emit_player_action_event(action);
            }
        }
    }
}

impl PlayerInputController {
    /// Находит SimulationBridge через NodePath
    fn bridge(&self) -> Option<Gd<SimulationBridge>> {
        let bridge = self
            .base()
            .get_tree()
            .and_then(|tree| tree.get_root())
            .and_then(|root| root.try_get_node_as::<SimulationBridge>(&self.simulation_bridge_path));

        if bridge.is_none() {
            vanguard_simulation::log_error(&format!(
                "PlayerInputController: SimulationBridge not found at path: {}",
                self.simulation_bridge_path
            ));
        }

        bridge
    }
}
