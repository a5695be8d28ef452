//! Player body + spawn helper
//!
//! `PlayerBody` - CharacterBody3D, который кладётся в сцену руками.
//! Tunables выставляются в inspector, ECS entity создаёт SimulationBridge.

pub mod body;
pub mod spawn;

pub use body::PlayerBody;
pub use spawn::spawn_player_entity;
