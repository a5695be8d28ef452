//! Exponential-decay фильтры (critically damped spring)
//!
//! Используются для:
//! - сглаживания yaw персонажа (`smooth_damp_angle`)
//! - damped animation параметров (`AnimatorParameters`)

/// Минимальное smooth time (защита от деления на 0)
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Плавно двигает `current` к `target` за примерно `smooth_time` секунд
///
/// `velocity` - состояние фильтра, хранится у вызывающего между вызовами.
/// Не проскакивает цель. При `dt <= 0` возвращает `current` без изменений.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Аппроксимация exp(-x) полиномом (стабильна для больших dt)
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;

    let mut output = target + (change + temp) * exp;

    // Проскочили цель → встаём точно в цель
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Кратчайшая разница углов (градусы), результат в (-180, 180]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// `smooth_damp` для углов в градусах - всегда поворачивает коротким путём
pub fn smooth_damp_angle(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}
