//! Body registry - NonSend resource для Godot nodes персонажей
//!
//! Main thread only (Gd<T> не Send+Sync).

use bevy::prelude::*;
use godot::classes::{AnimationTree, CharacterBody3D};
use godot::prelude::*;
use std::collections::HashMap;

/// Godot handles одного персонажа
pub struct BodyHandles {
    /// Тело (physics host: move_and_slide, is_on_floor)
    pub body: Gd<CharacterBody3D>,
    /// Animation layer (None → параметры не пишем)
    pub animation_tree: Option<Gd<AnimationTree>>,
    /// Камера/pivot для camera-relative движения (None → yaw 0)
    pub camera: Option<Gd<Node3D>>,
}

/// Registry: маппинг Entity → Godot handles
#[derive(Default)]
pub struct BodyRegistry {
    pub bodies: HashMap<Entity, BodyHandles>,
}
