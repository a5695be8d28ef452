//! Discrete action events (triggered input)
//!
//! Генерируются:
//! - PlayerInputController (Godot layer): `unhandled_input` → action pressed
//! - Headless host / тесты: `world.send_event(..)`
//!
//! Обрабатываются:
//! - `process_action_intents` - только для entity с `ControllerActive`

use bevy::prelude::*;

/// Event: намерение прыгнуть
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: намерение атаковать
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackIntent {
    pub entity: Entity,
}

/// Event: намерение уклониться
#[derive(Event, Debug, Clone, Copy)]
pub struct DodgeIntent {
    pub entity: Entity,
}
