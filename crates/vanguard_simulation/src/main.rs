//! Headless прогон контроллера
//!
//! Bevy App без рендера + Rapier kinematic host. Скриптованный input:
//! стоим → идём → бежим под углом камеры + прыжок → защита (атака блокируется) → атака.
//!
//! Usage: `vanguard_simulation [config.json]`

use std::process::ExitCode;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use vanguard_simulation::physics::{spawn_ground, spawn_kinematic_character, KinematicHostPlugin};
use vanguard_simulation::{
    create_headless_app, log_error, log_info, AnimatorParameters, AttackIntent, JumpIntent, LocomotionConfig,
    LocomotionInput, MotionState, SimulationPlugin,
};

const TICKS: u32 = 360;

fn main() -> ExitCode {
    let mut app = create_headless_app();

    let config = match std::env::args().nth(1) {
        Some(path) => match LocomotionConfig::load_json(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&err.to_string());
                return ExitCode::FAILURE;
            }
        },
        None => LocomotionConfig::default(),
    };

    log_info(&format!("Starting headless locomotion run: {:?}", config));

    app.add_plugins((
        bevy::transform::TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
        KinematicHostPlugin,
    ));

    let world = app.world_mut();
    let player = {
        let mut commands = world.commands();
        spawn_ground(&mut commands);
        spawn_kinematic_character(&mut commands, Vec3::new(0.0, 1.0, 0.0), config)
    };
    world.flush();

    for tick in 0..TICKS {
        drive_input(&mut app, player, tick);
        app.update();

        if tick % 30 == 0 {
            report(&mut app, player, tick);
        }
    }

    log_info("Headless run complete");
    ExitCode::SUCCESS
}

/// Скрипт input'а по тикам
fn drive_input(app: &mut App, player: Entity, tick: u32) {
    let world = app.world_mut();

    if let Some(mut input) = world.get_mut::<LocomotionInput>(player) {
        let (move_input, sprint, defend, camera_yaw) = match tick {
            0..=59 => (Vec2::ZERO, false, false, 0.0),
            60..=179 => (Vec2::Y, false, false, 0.0),
            180..=239 => (Vec2::Y, true, false, 45.0),
            240..=299 => (Vec2::ZERO, false, true, 45.0),
            _ => (Vec2::ZERO, false, false, 45.0),
        };

        input.move_input = move_input;
        input.sprint = sprint;
        input.defend = defend;
        input.camera_yaw = camera_yaw;
    }

    match tick {
        200 => {
            world.send_event(JumpIntent { entity: player });
        }
        // В защите - должна быть отброшена
        270 | 320 => {
            world.send_event(AttackIntent { entity: player });
        }
        _ => {}
    }
}

fn report(app: &mut App, player: Entity, tick: u32) {
    let world = app.world();

    let (Some(transform), Some(state), Some(animator)) = (
        world.get::<Transform>(player),
        world.get::<MotionState>(player),
        world.get::<AnimatorParameters>(player),
    ) else {
        log_error(&format!("Tick {}: player {:?} is missing components", tick, player));
        return;
    };

    log_info(&format!(
        "Tick {}: pos = {:.2?}, vy = {:.2}, grounded = {}, speed = {:.2}, defending = {}",
        tick,
        transform.translation,
        state.vertical_velocity,
        animator.is_grounded,
        animator.speed,
        state.is_defending,
    ));
}
