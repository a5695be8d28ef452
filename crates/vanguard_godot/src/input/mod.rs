//! Player input module
//!
//! Обрабатывает input от игрока и преобразует его в ECS events/intents.
//!
//! # Архитектура
//!
//! ```text
//! Godot InputMap actions
//!     ↓
//! PlayerInputController (Godot node) - controller.rs
//!     ↓ held: PlayerInputEvent каждый frame
//!     ↓ triggered: PlayerActionEvent из unhandled_input
//! Player input systems (ECS) - systems.rs
//!     ↓
//! LocomotionInput / JumpIntent / AttackIntent / DodgeIntent
//! ```
//!
//! # Actions (Project Settings → Input Map)
//! `move_left`, `move_right`, `move_forward`, `move_back`, `sprint`, `defend`,
//! `jump`, `attack`, `dodge`

pub mod controller;
pub mod events;
pub mod systems;

// Re-exports для external use
pub use controller::*;
pub use events::*;
pub use systems::*;
