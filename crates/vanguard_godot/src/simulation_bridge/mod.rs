//! Мост между Godot и Rust ECS симуляцией
//!
//! Архитектура:
//! - SimulationBridge владеет Bevy App (locomotion + NonSend registries)
//! - PlayerBody кладётся в сцену руками, bridge создаёт для него ECS entity
//! - Каждый frame: TickDelta(delta) → app.update() (host sync → locomotion → apply)

mod logger;
mod systems_setup;

use godot::classes::{INode3D, Node};
use godot::prelude::*;
use logger::GodotLogger;
use vanguard_simulation::{create_headless_app, LogLevel, SimulationPlugin, TickDelta};

use crate::input::{PlayerActionEvent, PlayerInputController, PlayerInputEvent};
use crate::player::{spawn_player_entity, PlayerBody};
use crate::systems::BodyRegistry;

/// SimulationBridge: главный node для Godot ↔ ECS интеграции
#[derive(GodotClass)]
#[class(base=Node3D)]
pub struct SimulationBridge {
    base: Base<Node3D>,

    /// Player body в сцене (spawn'ится автоматически в ready)
    #[export]
    player: Option<Gd<PlayerBody>>,

    /// Bevy ECS App (симуляция + NonSend body registry)
    simulation: Option<bevy::app::App>,

    /// Единственный input controller (создаётся при первом spawn_player)
    input_controller: Option<Gd<PlayerInputController>>,
}

#[godot_api]
impl INode3D for SimulationBridge {
    fn init(base: Base<Node3D>) -> Self {
        Self {
            base,
            player: None,
            simulation: None,
            input_controller: None,
        }
    }

    fn ready(&mut self) {
        GodotLogger::clear_log_file();
        vanguard_simulation::set_logger(Box::new(GodotLogger));
        vanguard_simulation::set_log_level(LogLevel::Debug);
        vanguard_simulation::log("SimulationBridge ready");

        // 1. Инициализируем ECS симуляцию
        let mut app = create_headless_app();
        app.add_plugins(SimulationPlugin);

        // 2. NonSend resources (main thread only)
        app.insert_non_send_resource(BodyRegistry::default());

        // 3. Godot-side systems вокруг LocomotionSet
        systems_setup::register_systems(&mut app);

        self.simulation = Some(app);

        // 4. Player из сцены
        match self.player.clone() {
            Some(body) => self.spawn_player(body),
            None => vanguard_simulation::log_warning("SimulationBridge: player body not assigned"),
        }
    }

    fn process(&mut self, delta: f64) {
        if let Some(app) = &mut self.simulation {
            // delta кадра Godot → locomotion integration
            app.world_mut().insert_resource(TickDelta(delta as f32));

            app.update();
        }
    }
}

#[godot_api]
impl SimulationBridge {
    /// Создаёт ECS entity для PlayerBody + PlayerInputController
    #[func]
    pub fn spawn_player(&mut self, body: Gd<PlayerBody>) {
        let Some(app) = &mut self.simulation else {
            vanguard_simulation::log_error("SimulationBridge: simulation not initialized");
            return;
        };

        let player_entity = spawn_player_entity(app.world_mut(), body);

        // Один PlayerInputController на bridge: повторный spawn не должен дублировать input
        if self.input_controller.is_none() {
            let mut controller = PlayerInputController::new_alloc();

            // Абсолютный путь к SimulationBridge
            let bridge_path = self.base().get_path();
            controller.bind_mut().simulation_bridge_path = bridge_path;

            self.base_mut().add_child(&controller.clone().upcast::<Node>());
            self.input_controller = Some(controller);
        }

        vanguard_simulation::log(&format!("Player ready (entity: {:?})", player_entity));
    }

    /// Held input от PlayerInputController (каждый frame)
    pub fn emit_player_input_event(&mut self, event: PlayerInputEvent) {
        let Some(app) = &mut self.simulation else {
            return;
        };

        app.world_mut().send_event(event);
    }

    /// Jump/Attack/Dodge от PlayerInputController (unhandled_input)
    pub fn emit_player_action_event(&mut self, event: PlayerActionEvent) {
        let Some(app) = &mut self.simulation else {
            return;
        };

        app.world_mut().send_event(event);
    }
}
