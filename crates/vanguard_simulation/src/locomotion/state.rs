//! Motion state - мутируется каждый tick, живёт столько же сколько entity

use bevy::prelude::*;

/// Состояние движения персонажа
///
/// Создаётся при spawn (`Default`), не сериализуется.
///
/// # Инварианты
/// - `air_velocity` перезаписывается ТОЛЬКО на земле; в воздухе константа
///   (нет air control)
/// - `is_defending` блокирует jump/attack/dodge одинаково
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotionState {
    /// Вертикальная скорость (m/s), накапливает gravity
    pub vertical_velocity: f32,
    /// Горизонтальная скорость последнего grounded-кадра с движением
    pub air_velocity: Vec3,
    /// Зеркало последнего SetYaw (градусы), для хоста/диагностики
    ///
    /// Updater его НЕ читает: сглаживание идёт от `LocomotionInput::facing_yaw`
    /// (реальный yaw тела от хоста). В воздухе, стоя и в защите не меняется.
    pub facing_angle: f32,
    /// Вспомогательная скорость для smooth_damp_angle
    pub turn_smooth_velocity: f32,
    /// Защита (latched из held defend input)
    pub is_defending: bool,
}
