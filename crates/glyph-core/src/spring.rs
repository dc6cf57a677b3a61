//! Damped spring integrator shared by every animated quantity.
//!
//! A spring advances a value toward a target with mass/tension/friction
//! dynamics. Glyph lift and color use the snappy preset, the camera target
//! uses the slow one; both go through the same integration code.

use crate::constants::{CAMERA_SPRING, GLYPH_SPRING, MAX_FRAME_DT_SEC, SPRING_SUBSTEP_SEC};
use glam::Vec3;
use std::ops::{Add, Mul, Sub};

const REST_DISTANCE: f32 = 1e-4;
const REST_VELOCITY: f32 = 1e-3;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    pub const fn new(mass: f32, tension: f32, friction: f32) -> Self {
        Self {
            mass,
            tension,
            friction,
        }
    }

    /// Preset for per-glyph lift and color.
    pub const fn glyph() -> Self {
        Self::new(GLYPH_SPRING[0], GLYPH_SPRING[1], GLYPH_SPRING[2])
    }

    /// Slower, heavily damped preset for the camera target.
    pub const fn camera() -> Self {
        Self::new(CAMERA_SPRING[0], CAMERA_SPRING[1], CAMERA_SPRING[2])
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::glyph()
    }
}

/// Values a spring can animate.
pub trait SpringValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;
    fn magnitude(self) -> f32;
}

impl SpringValue for f32 {
    const ZERO: Self = 0.0;
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec3 {
    const ZERO: Self = Vec3::ZERO;
    fn magnitude(self) -> f32 {
        self.length()
    }
}

#[derive(Clone, Debug)]
pub struct Spring<T: SpringValue> {
    config: SpringConfig,
    value: T,
    velocity: T,
    target: T,
}

impl<T: SpringValue> Spring<T> {
    /// A spring at rest on `value`.
    pub fn new(value: T, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: T::ZERO,
            target: value,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget without touching position or velocity.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.value).magnitude() < REST_DISTANCE
            && self.velocity.magnitude() < REST_VELOCITY
    }

    /// Integrate `dt` seconds in fixed sub-steps (semi-implicit Euler).
    pub fn advance(&mut self, dt: f32) -> T {
        if !dt.is_finite() || dt <= 0.0 {
            return self.value;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = T::ZERO;
            return self.value;
        }
        let dt = dt.min(MAX_FRAME_DT_SEC);
        let steps = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringConfig {
            mass,
            tension,
            friction,
        } = self.config;
        for _ in 0..steps {
            let spring_force = (self.target - self.value) * tension;
            let damping_force = self.velocity * -friction;
            let accel = (spring_force + damping_force) * (1.0 / mass);
            self.velocity = self.velocity + accel * h;
            self.value = self.value + self.velocity * h;
        }
        self.value
    }
}
