//! Animation parameter bag
//!
//! Зеркало параметров animation layer хоста ("Speed", "isGrounded", "isDefending",
//! triggers). Хост применяет `AnimationCommand` сюда, потом копирует значения в
//! свою систему анимации (Godot AnimationTree).
//!
//! Зачем своё: Godot AnimationTree не умеет damped set, поэтому damping "Speed"
//! считаем здесь (тем же smooth_damp что и поворот).

use bevy::prelude::*;

use crate::locomotion::commands::{AnimationCommand, BoolParam, FloatParam, LocomotionCommand, TriggerParam};
use crate::locomotion::smoothing::smooth_damp;

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorParameters {
    pub speed: f32,
    /// Состояние фильтра для damped "Speed"
    pub speed_velocity: f32,
    pub is_grounded: bool,
    pub is_defending: bool,
    /// Triggers, ещё не отданные хосту
    pub pending_triggers: Vec<TriggerParam>,
}

impl AnimatorParameters {
    pub fn apply(&mut self, command: &AnimationCommand, dt: f32) {
        match *command {
            AnimationCommand::SetFloat { param, value, damp_time } => {
                let (current, velocity) = self.float_mut(param);
                match damp_time {
                    Some(damp_time) => *current = smooth_damp(*current, value, velocity, damp_time, dt),
                    None => {
                        *current = value;
                        *velocity = 0.0;
                    }
                }
            }
            AnimationCommand::SetBool { param, value } => match param {
                BoolParam::IsGrounded => self.is_grounded = value,
                BoolParam::IsDefending => self.is_defending = value,
            },
            AnimationCommand::Trigger(trigger) => self.pending_triggers.push(trigger),
        }
    }

    /// Применить все animation команды frame'а (остальные пропускаются)
    pub fn apply_all(&mut self, commands: &[LocomotionCommand], dt: f32) {
        for command in commands {
            if let LocomotionCommand::Animation(animation) = command {
                self.apply(animation, dt);
            }
        }
    }

    pub fn float(&self, param: FloatParam) -> f32 {
        match param {
            FloatParam::Speed => self.speed,
        }
    }

    pub fn flag(&self, param: BoolParam) -> bool {
        match param {
            BoolParam::IsGrounded => self.is_grounded,
            BoolParam::IsDefending => self.is_defending,
        }
    }

    /// Забрать one-shot triggers (каждый отдаётся хосту ровно один раз)
    pub fn take_triggers(&mut self) -> Vec<TriggerParam> {
        std::mem::take(&mut self.pending_triggers)
    }

    fn float_mut(&mut self, param: FloatParam) -> (&mut f32, &mut f32) {
        match param {
            FloatParam::Speed => (&mut self.speed, &mut self.speed_velocity),
        }
    }
}
