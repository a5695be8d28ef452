//! Tests for locomotion updater (pure logic, без App).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::locomotion::commands::*;
    use crate::locomotion::config::{LocomotionConfig, GROUNDED_STICK_VELOCITY, SPEED_DAMP_TIME};
    use crate::locomotion::input::LocomotionInput;
    use crate::locomotion::state::MotionState;
    use crate::locomotion::update::*;

    const DT: f32 = 1.0 / 60.0;

    fn grounded_input() -> LocomotionInput {
        LocomotionInput {
            grounded: true,
            ..default()
        }
    }

    fn run_tick(state: &mut MotionState, input: &LocomotionInput) -> Vec<LocomotionCommand> {
        let mut out = LocomotionCommands::default();
        tick(state, &LocomotionConfig::default(), input, DT, &mut out);
        out.drain()
    }

    fn defending_notifications(commands: &[LocomotionCommand]) -> usize {
        commands
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    LocomotionCommand::Animation(AnimationCommand::SetBool {
                        param: BoolParam::IsDefending,
                        ..
                    })
                )
            })
            .count()
    }

    #[test]
    fn test_grounded_falling_velocity_sticks_to_ground() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: -15.0,
            ..default()
        };

        let commands = run_tick(&mut state, &grounded_input());

        let expected = GROUNDED_STICK_VELOCITY + config.gravity * DT;
        assert_eq!(state.vertical_velocity, expected);
        assert_eq!(commands[0], LocomotionCommand::Move(Vec3::new(0.0, expected, 0.0) * DT));
    }

    #[test]
    fn test_grounded_rising_velocity_not_clamped() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: 3.0,
            ..default()
        };

        run_tick(&mut state, &grounded_input());

        assert_eq!(state.vertical_velocity, 3.0 + config.gravity * DT);
    }

    #[test]
    fn test_airborne_gravity_accumulates() {
        let config = LocomotionConfig::default();
        let mut state = MotionState::default();
        let input = LocomotionInput::default(); // grounded = false

        run_tick(&mut state, &input);
        run_tick(&mut state, &input);

        let expected = config.gravity * DT + config.gravity * DT;
        assert!((state.vertical_velocity - expected).abs() < 1e-6);
    }

    #[test]
    fn test_launch_velocity_closed_form() {
        let v = launch_velocity(1.5, -9.81);
        assert!((v - 5.425).abs() < 0.001, "v = {}", v);
    }

    #[test]
    fn test_jump_sets_launch_velocity_and_trigger() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: -2.0,
            ..default()
        };
        let mut out = LocomotionCommands::default();

        assert!(on_jump(&mut state, &config, true, &mut out));
        assert_eq!(state.vertical_velocity, launch_velocity(config.jump_height, config.gravity));
        assert_eq!(out.triggers().collect::<Vec<_>>(), vec![TriggerParam::Jump]);
    }

    #[test]
    fn test_jump_requires_ground() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            vertical_velocity: -4.0,
            ..default()
        };
        let mut out = LocomotionCommands::default();

        assert!(!on_jump(&mut state, &config, false, &mut out));
        assert_eq!(state.vertical_velocity, -4.0);
        assert!(out.commands.is_empty());
    }

    #[test]
    fn test_defending_blocks_all_actions() {
        let config = LocomotionConfig::default();
        let mut state = MotionState {
            is_defending: true,
            vertical_velocity: -2.0,
            ..default()
        };
        let mut out = LocomotionCommands::default();

        assert!(!on_jump(&mut state, &config, true, &mut out));
        assert!(!on_attack(&state, &mut out));
        assert!(!on_dodge(&state, true, &mut out));

        assert!(out.commands.is_empty());
        assert_eq!(state.vertical_velocity, -2.0);
    }

    #[test]
    fn test_attack_allowed_in_air() {
        let state = MotionState::default();
        let mut out = LocomotionCommands::default();

        assert!(on_attack(&state, &mut out));
        assert_eq!(out.triggers().collect::<Vec<_>>(), vec![TriggerParam::Attack]);
    }

    #[test]
    fn test_dodge_requires_ground() {
        let state = MotionState::default();
        let mut out = LocomotionCommands::default();

        assert!(!on_dodge(&state, false, &mut out));
        assert!(out.commands.is_empty());

        assert!(on_dodge(&state, true, &mut out));
        assert_eq!(out.triggers().collect::<Vec<_>>(), vec![TriggerParam::Dodge]);
    }

    #[test]
    fn test_no_input_on_ground_clears_air_velocity() {
        let mut state = MotionState {
            air_velocity: Vec3::new(4.0, 0.0, 1.0),
            ..default()
        };

        let commands = run_tick(&mut state, &grounded_input());

        assert_eq!(state.air_velocity, Vec3::ZERO);
        assert!(commands.contains(&LocomotionCommand::Animation(AnimationCommand::SetFloat {
            param: FloatParam::Speed,
            value: 0.0,
            damp_time: Some(SPEED_DAMP_TIME),
        })));
        // Только gravity move, горизонтального нет
        assert_eq!(commands.iter().filter(|c| matches!(c, LocomotionCommand::Move(_))).count(), 1);
    }

    #[test]
    fn test_walk_forward_relative_to_camera() {
        let config = LocomotionConfig::default();
        let mut state = MotionState::default();
        let input = LocomotionInput {
            move_input: Vec2::new(0.0, 1.0),
            grounded: true,
            camera_yaw: 90.0,
            ..default()
        };

        let commands = run_tick(&mut state, &input);

        // forward + камера 90° → движение по +X
        assert!((state.air_velocity - Vec3::new(config.walk_speed, 0.0, 0.0)).length() < 1e-5);

        // [0] = gravity, [1] = горизонтальное смещение
        let moves: Vec<Vec3> = commands
            .iter()
            .filter_map(|command| match command {
                LocomotionCommand::Move(delta) => Some(*delta),
                _ => None,
            })
            .collect();
        assert_eq!(moves.len(), 2);
        assert!((moves[1] - Vec3::X * config.walk_speed * DT).length() < 1e-5);

        // Поворот сглажен: между текущим (0°) и целевым (90°)
        let yaw = last_yaw(&commands).unwrap();
        assert!(yaw > 0.0 && yaw < 90.0, "yaw = {}", yaw);
        assert_eq!(state.facing_angle, yaw);
    }

    #[test]
    fn test_facing_angle_holds_last_issued_yaw() {
        let mut state = MotionState::default();
        let walking = LocomotionInput {
            move_input: Vec2::X,
            ..grounded_input()
        };

        let issued = last_yaw(&run_tick(&mut state, &walking)).unwrap();

        // В воздухе / стоя / в защите SetYaw нет - значение не меняется
        let airborne = LocomotionInput {
            grounded: false,
            ..walking
        };
        assert_eq!(last_yaw(&run_tick(&mut state, &airborne)), None);
        assert_eq!(last_yaw(&run_tick(&mut state, &grounded_input())), None);
        assert_eq!(state.facing_angle, issued);

        // Updater сглаживает от yaw хоста, а не от facing_angle
        state.turn_smooth_velocity = 0.0;
        let host_rotated = LocomotionInput {
            facing_yaw: 90.0,
            ..walking
        };
        let from_host = last_yaw(&run_tick(&mut state, &host_rotated)).unwrap();
        assert!((from_host - 90.0).abs() < 1e-3, "yaw = {}", from_host);
        assert_eq!(state.facing_angle, from_host);
    }

    #[test]
    fn test_sprint_uses_sprint_speed() {
        let config = LocomotionConfig::default();
        let mut state = MotionState::default();
        let input = LocomotionInput {
            move_input: Vec2::new(-1.0, 0.0),
            sprint: true,
            grounded: true,
            ..default()
        };

        let commands = run_tick(&mut state, &input);

        assert!((state.air_velocity.length() - config.sprint_speed).abs() < 1e-5);
        assert!((state.air_velocity.x + config.sprint_speed).abs() < 1e-5);
        assert!(commands.contains(&LocomotionCommand::Animation(AnimationCommand::SetFloat {
            param: FloatParam::Speed,
            value: config.sprint_speed,
            damp_time: Some(SPEED_DAMP_TIME),
        })));
    }

    #[test]
    fn test_small_stick_deflection_moves_at_full_speed() {
        let config = LocomotionConfig::default();
        let mut state = MotionState::default();
        let input = LocomotionInput {
            move_input: Vec2::new(0.0, 0.05),
            grounded: true,
            ..default()
        };

        run_tick(&mut state, &input);

        assert!((state.air_velocity.length() - config.walk_speed).abs() < 1e-5);
    }

    #[test]
    fn test_airborne_replays_cached_velocity_without_steering() {
        let cached = Vec3::new(0.0, 0.0, 6.0);
        let mut state = MotionState {
            air_velocity: cached,
            ..default()
        };

        let inputs = [
            LocomotionInput { move_input: Vec2::new(1.0, 0.0), ..default() },
            LocomotionInput { move_input: Vec2::new(0.0, -1.0), sprint: true, ..default() },
            LocomotionInput::default(),
        ];

        for input in &inputs {
            let commands = run_tick(&mut state, input);
            assert_eq!(commands[1], LocomotionCommand::Move(cached * DT));
            assert_eq!(last_yaw(&commands), None);
            assert_eq!(state.air_velocity, cached);
        }
    }

    #[test]
    fn test_defending_skips_movement_but_not_gravity() {
        let mut state = MotionState {
            is_defending: true,
            air_velocity: Vec3::new(2.0, 0.0, 0.0),
            ..default()
        };
        let input = LocomotionInput {
            move_input: Vec2::new(0.0, 1.0),
            defend: true,
            grounded: true,
            ..default()
        };

        let commands = run_tick(&mut state, &input);

        assert_eq!(
            commands,
            vec![
                LocomotionCommand::Move(Vec3::new(0.0, state.vertical_velocity, 0.0) * DT),
                LocomotionCommand::Animation(AnimationCommand::SetFloat {
                    param: FloatParam::Speed,
                    value: 0.0,
                    damp_time: None,
                }),
                LocomotionCommand::Animation(AnimationCommand::SetBool {
                    param: BoolParam::IsGrounded,
                    value: true,
                }),
            ]
        );
        // cached velocity не трогаем
        assert_eq!(state.air_velocity, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_defend_toggle_notifies_once() {
        let mut state = MotionState::default();
        let input = LocomotionInput {
            defend: true,
            grounded: true,
            ..default()
        };

        let first = run_tick(&mut state, &input);
        assert!(state.is_defending);
        assert_eq!(defending_notifications(&first), 1);

        for _ in 0..5 {
            let commands = run_tick(&mut state, &input);
            assert_eq!(defending_notifications(&commands), 0);
        }

        let released = run_tick(&mut state, &grounded_input());
        assert!(!state.is_defending);
        assert_eq!(defending_notifications(&released), 1);
    }

    #[test]
    fn test_defend_latch_applies_from_next_tick() {
        let mut state = MotionState::default();
        let input = LocomotionInput {
            move_input: Vec2::new(0.0, 1.0),
            defend: true,
            grounded: true,
            ..default()
        };

        // Первый tick: movement ещё видит is_defending = false
        let first = run_tick(&mut state, &input);
        assert!(last_yaw(&first).is_some());

        // Второй tick: уже в защите - нет поворота
        let second = run_tick(&mut state, &input);
        assert_eq!(last_yaw(&second), None);
    }

    #[test]
    fn test_grounded_published_every_tick() {
        let mut state = MotionState::default();

        for grounded in [true, false, false, true] {
            let input = LocomotionInput { grounded, ..default() };
            let commands = run_tick(&mut state, &input);
            assert_eq!(
                commands.last(),
                Some(&LocomotionCommand::Animation(AnimationCommand::SetBool {
                    param: BoolParam::IsGrounded,
                    value: grounded,
                }))
            );
        }
    }

    #[test]
    fn test_yaw_to_forward_axes() {
        assert!((yaw_to_forward(0.0) - Vec3::Z).length() < 1e-6);
        assert!((yaw_to_forward(90.0) - Vec3::X).length() < 1e-6);
        assert!((yaw_to_forward(180.0) + Vec3::Z).length() < 1e-5);
    }
}
