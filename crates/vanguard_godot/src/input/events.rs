//! Player input events
//!
//! События генерируются из Godot Input API (PlayerInputController)
//! и обрабатываются ECS systems.

use bevy::prelude::{Event, Vec2};

/// Held input - генерируется каждый frame
///
/// # Fields
/// - `move_input`: уже в simulation координатах (y = +1 → вперёд), см. `coords`
/// - `sprint`, `defend`: удерживаются
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerInputEvent {
    pub move_input: Vec2,
    pub sprint: bool,
    pub defend: bool,
}

/// Triggered input - один event на нажатие
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerActionEvent {
    Jump,
    Attack,
    Dodge,
}

impl PlayerActionEvent {
    /// Имя action в Godot InputMap
    pub fn action_name(&self) -> &'static str {
        match self {
            PlayerActionEvent::Jump => "jump",
            PlayerActionEvent::Attack => "attack",
            PlayerActionEvent::Dodge => "dodge",
        }
    }

    pub const ALL: [PlayerActionEvent; 3] = [PlayerActionEvent::Jump, PlayerActionEvent::Attack, PlayerActionEvent::Dodge];
}
