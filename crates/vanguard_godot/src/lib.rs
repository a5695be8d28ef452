use godot::prelude::*;

mod animation;
mod coords;
mod input;
mod player;
mod simulation_bridge;
mod systems;

/// GDExtension entry point
struct VanguardExtension;

#[gdextension]
unsafe impl ExtensionLibrary for VanguardExtension {}
