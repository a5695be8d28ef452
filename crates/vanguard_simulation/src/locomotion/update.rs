//! Locomotion/State updater - чистая логика, без ECS и без хоста
//!
//! `(state, config, input, dt) -> (state', commands)`:
//! state мутируется на месте, команды пишутся в буфер.
//!
//! Порядок tick (важен!):
//! 1. Gravity (ВСЕГДА, даже в защите)
//! 2. Movement (в защите - ранний выход)
//! 3. Defense toggle (latch held input → notify animation)
//! 4. isGrounded → animation (ВСЕГДА)
//!
//! Следствие порядка: movement видит `is_defending` с прошлого tick'а.

use bevy::prelude::*;

use super::commands::{AnimationCommand, BoolParam, FloatParam, LocomotionCommand, LocomotionCommands, TriggerParam};
use super::config::{LocomotionConfig, GROUNDED_STICK_VELOCITY, MOVE_INPUT_THRESHOLD, SPEED_DAMP_TIME};
use super::input::LocomotionInput;
use super::smoothing::smooth_damp_angle;
use super::state::MotionState;

/// Один simulation tick
pub fn tick(
    state: &mut MotionState,
    config: &LocomotionConfig,
    input: &LocomotionInput,
    dt: f32,
    out: &mut LocomotionCommands,
) {
    apply_gravity(state, config, input.grounded, dt, out);
    apply_movement(state, config, input, dt, out);
    update_defense(state, input.defend, out);

    out.push(LocomotionCommand::Animation(AnimationCommand::SetBool {
        param: BoolParam::IsGrounded,
        value: input.grounded,
    }));
}

/// Gravity integration
///
/// На земле и падаем → прилипаем (`GROUNDED_STICK_VELOCITY`), потом `+= gravity * dt`.
pub fn apply_gravity(state: &mut MotionState, config: &LocomotionConfig, grounded: bool, dt: f32, out: &mut LocomotionCommands) {
    if grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = GROUNDED_STICK_VELOCITY;
    }

    state.vertical_velocity += config.gravity * dt;

    out.push(LocomotionCommand::Move(Vec3::new(0.0, state.vertical_velocity, 0.0) * dt));
}

/// Горизонтальное движение + поворот + "Speed"
pub fn apply_movement(
    state: &mut MotionState,
    config: &LocomotionConfig,
    input: &LocomotionInput,
    dt: f32,
    out: &mut LocomotionCommands,
) {
    if state.is_defending {
        out.push(set_speed(0.0, None));
        return;
    }

    // В воздухе: replay закэшированной velocity (нет air control, нет поворота)
    if !input.grounded {
        out.push(LocomotionCommand::Move(state.air_velocity * dt));
        return;
    }

    // normalize_or_zero: любой ненулевой input → длина 1
    let direction = Vec3::new(input.move_input.x, 0.0, input.move_input.y).normalize_or_zero();

    if direction.length() >= MOVE_INPUT_THRESHOLD {
        let target_angle = direction.x.atan2(direction.z).to_degrees() + input.camera_yaw;
        let angle = smooth_damp_angle(
            input.facing_yaw,
            target_angle,
            &mut state.turn_smooth_velocity,
            config.rotation_smooth_time,
            dt,
        );

        state.facing_angle = angle;
        out.push(LocomotionCommand::SetYaw(angle));

        // Направление из TARGET угла (не сглаженного): разворот не замедляет движение
        let move_direction = yaw_to_forward(target_angle);
        let speed = if input.sprint { config.sprint_speed } else { config.walk_speed };

        state.air_velocity = move_direction * speed;

        out.push(LocomotionCommand::Move(move_direction * speed * dt));
        out.push(set_speed(speed, Some(SPEED_DAMP_TIME)));
    } else {
        state.air_velocity = Vec3::ZERO;
        out.push(set_speed(0.0, Some(SPEED_DAMP_TIME)));
    }
}

/// Latch held defend → notify animation только при смене
///
/// Возвращает true если флаг изменился.
pub fn update_defense(state: &mut MotionState, defend_held: bool, out: &mut LocomotionCommands) -> bool {
    if defend_held == state.is_defending {
        return false;
    }

    state.is_defending = defend_held;
    out.push(LocomotionCommand::Animation(AnimationCommand::SetBool {
        param: BoolParam::IsDefending,
        value: defend_held,
    }));
    true
}

/// Jump: только на земле и не в защите
///
/// Возвращает true если прыжок состоялся.
pub fn on_jump(state: &mut MotionState, config: &LocomotionConfig, grounded: bool, out: &mut LocomotionCommands) -> bool {
    if !grounded || state.is_defending {
        return false;
    }

    state.vertical_velocity = launch_velocity(config.jump_height, config.gravity);
    out.push(trigger(TriggerParam::Jump));
    true
}

/// Attack: только не в защите
pub fn on_attack(state: &MotionState, out: &mut LocomotionCommands) -> bool {
    if state.is_defending {
        return false;
    }

    out.push(trigger(TriggerParam::Attack));
    true
}

/// Dodge: только не в защите и на земле
pub fn on_dodge(state: &MotionState, grounded: bool, out: &mut LocomotionCommands) -> bool {
    if state.is_defending || !grounded {
        return false;
    }

    out.push(trigger(TriggerParam::Dodge));
    true
}

/// Стартовая скорость для апекса `jump_height` при гравитации `gravity`
///
/// v = sqrt(h * -2 * g). При положительной gravity → NaN (не валидируем).
pub fn launch_velocity(jump_height: f32, gravity: f32) -> f32 {
    (jump_height * -2.0 * gravity).sqrt()
}

/// Forward вектор для yaw (градусы, по часовой от +Z)
pub fn yaw_to_forward(yaw_degrees: f32) -> Vec3 {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    Vec3::new(sin, 0.0, cos)
}

fn set_speed(value: f32, damp_time: Option<f32>) -> LocomotionCommand {
    LocomotionCommand::Animation(AnimationCommand::SetFloat {
        param: FloatParam::Speed,
        value,
        damp_time,
    })
}

fn trigger(param: TriggerParam) -> LocomotionCommand {
    LocomotionCommand::Animation(AnimationCommand::Trigger(param))
}
