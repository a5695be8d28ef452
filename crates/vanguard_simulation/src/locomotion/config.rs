//! Tunables контроллера персонажа
//!
//! Источники (по приоритету):
//! 1. `Default` (значения ниже)
//! 2. JSON файл (`LocomotionConfig::load_json`) - headless CLI
//! 3. Godot inspector (`#[export]` поля PlayerBody) - собираются в config при spawn
//!
//! Значения НЕ валидируются: отрицательная скорость или положительная гравитация
//! просто дают соответствующее поведение.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Прилипание к земле: на земле vertical velocity держим чуть отрицательной,
/// а не 0 - иначе grounded-детекция хоста мигает.
pub const GROUNDED_STICK_VELOCITY: f32 = -2.0;

/// Минимальная длина (нормализованного) move input для движения
pub const MOVE_INPUT_THRESHOLD: f32 = 0.1;

/// Damp time для animation параметра "Speed" (сек).
///
/// Отдельно от `rotation_smooth_time`: это разные константы, не объединять.
pub const SPEED_DAMP_TIME: f32 = 0.1;

/// Настройки движения/прыжка (per-character component)
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Скорость бега (m/s), пока зажат sprint
    pub sprint_speed: f32,
    /// Время сглаживания поворота (сек)
    pub rotation_smooth_time: f32,
    /// Гравитация (m/s², отрицательная = вниз)
    pub gravity: f32,
    /// Высота прыжка в апексе (m)
    pub jump_height: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            sprint_speed: 6.0,
            rotation_smooth_time: 0.1,
            gravity: -9.81,
            jump_height: 1.5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LocomotionConfig {
    /// Читает config из JSON. Отсутствующие поля берутся из `Default`.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
