//! Vanguard Simulation Core
//!
//! ECS-логика third-person контроллера на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = decision layer (gravity, movement intent, combat-state gating)
//! - Host = physics/input/animation (Godot CharacterBody3D + AnimationTree,
//!   либо headless Rapier host из `physics`)

use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod locomotion;
pub mod logger;
pub mod physics;
pub mod player;

pub use animation::AnimatorParameters;
pub use locomotion::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use player::Player;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(LocomotionPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// `TickDelta` фиксирован (60 Hz) - хост может перезаписывать его каждый frame.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).insert_resource(TickDelta(1.0 / 60.0));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
