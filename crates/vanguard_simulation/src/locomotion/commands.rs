//! Команды хосту: перемещение, поворот, animation параметры
//!
//! Architecture:
//! - ECS updater пишет команды в `LocomotionCommands` (буфер per-entity)
//! - Хост (Godot bridge / rapier host) drain'ит буфер после `app.update()`
//! - Буфер очищается в начале каждого frame (`clear_command_buffers`)

use bevy::prelude::*;

/// Float параметр animation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatParam {
    Speed,
}

/// Bool параметр animation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolParam {
    IsGrounded,
    IsDefending,
}

/// One-shot trigger animation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerParam {
    Jump,
    Attack,
    Dodge,
}

impl FloatParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatParam::Speed => "Speed",
        }
    }
}

impl BoolParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolParam::IsGrounded => "isGrounded",
            BoolParam::IsDefending => "isDefending",
        }
    }
}

impl TriggerParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerParam::Jump => "Jump",
            TriggerParam::Attack => "Attack",
            TriggerParam::Dodge => "Dodge",
        }
    }
}

/// Команда animation layer (фиксированный протокол параметров)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    /// `damp_time: None` → мгновенно, `Some(t)` → сглаживание за t сек
    SetFloat {
        param: FloatParam,
        value: f32,
        damp_time: Option<f32>,
    },
    SetBool { param: BoolParam, value: bool },
    Trigger(TriggerParam),
}

/// Команда хосту
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionCommand {
    /// Смещение за этот tick (sweep/step-up делает хост)
    Move(Vec3),
    /// Yaw тела (градусы)
    SetYaw(f32),
    Animation(AnimationCommand),
}

/// Буфер команд одного frame
#[derive(Component, Debug, Clone, Default)]
pub struct LocomotionCommands {
    pub commands: Vec<LocomotionCommand>,
}

impl LocomotionCommands {
    pub fn push(&mut self, command: LocomotionCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Забрать все команды (хост вызывает после update)
    pub fn drain(&mut self) -> Vec<LocomotionCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn animation(&self) -> impl Iterator<Item = &AnimationCommand> {
        self.commands.iter().filter_map(|command| match command {
            LocomotionCommand::Animation(animation) => Some(animation),
            _ => None,
        })
    }

    pub fn triggers(&self) -> impl Iterator<Item = TriggerParam> + '_ {
        self.animation().filter_map(|command| match command {
            AnimationCommand::Trigger(trigger) => Some(*trigger),
            _ => None,
        })
    }
}

/// Сумма всех `Move` смещений (хост двигает тело одним sweep'ом за frame)
pub fn sum_move_deltas(commands: &[LocomotionCommand]) -> Vec3 {
    commands
        .iter()
        .filter_map(|command| match command {
            LocomotionCommand::Move(delta) => Some(*delta),
            _ => None,
        })
        .sum()
}

/// Последний `SetYaw` за frame (если был)
pub fn last_yaw(commands: &[LocomotionCommand]) -> Option<f32> {
    commands.iter().rev().find_map(|command| match command {
        LocomotionCommand::SetYaw(yaw) => Some(*yaw),
        _ => None,
    })
}
