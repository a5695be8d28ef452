//! Player control marker component
//!
//! Отмечает entity, которым управляет игрок через input.

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// # Архитектурная заметка
/// - Host input systems используют `With<Player>` (PlayerInputController пишет
///   `LocomotionInput` только игроку)
/// - Locomotion systems фильтруют по `ControllerActive`, не по `Player`:
///   тот же контроллер может вести и не-игрока
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
