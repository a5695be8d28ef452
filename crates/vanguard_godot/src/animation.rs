//! AnimationTree bridge
//!
//! `AnimatorParameters` (ECS) → AnimationTree property paths:
//! - "Speed"       → `parameters/Speed/blend_position` (BlendSpace1D)
//! - bool params   → `parameters/conditions/<name>` (StateMachine transition conditions)
//! - triggers      → `parameters/<name>/request` (OneShot FIRE)
//!
//! Damping "Speed" уже посчитан в AnimatorParameters, сюда приходит готовое значение.

use godot::classes::AnimationTree;
use godot::prelude::*;
use vanguard_simulation::{AnimatorParameters, BoolParam, FloatParam, TriggerParam};

/// AnimationNodeOneShot::ONE_SHOT_REQUEST_FIRE
const ONE_SHOT_REQUEST_FIRE: i64 = 1;

fn float_path(param: FloatParam) -> String {
    format!("parameters/{}/blend_position", param.as_str())
}

fn condition_path(param: BoolParam) -> String {
    format!("parameters/conditions/{}", param.as_str())
}

fn trigger_path(param: TriggerParam) -> String {
    format!("parameters/{}/request", param.as_str())
}

/// Пишет текущие параметры + one-shot triggers frame'а в AnimationTree
pub fn push_animation_parameters(mut tree: Gd<AnimationTree>, animator: &AnimatorParameters, triggers: &[TriggerParam]) {
    if !tree.is_instance_valid() {
        return;
    }

    let speed = FloatParam::Speed;
    tree.set(float_path(speed).as_str(), &animator.float(speed).to_variant());

    for param in [BoolParam::IsGrounded, BoolParam::IsDefending] {
        tree.set(condition_path(param).as_str(), &animator.flag(param).to_variant());
    }

    for trigger in triggers {
        tree.set(trigger_path(*trigger).as_str(), &ONE_SHOT_REQUEST_FIRE.to_variant());
    }
}
