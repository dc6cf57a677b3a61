//! Stochastic ambient light flashes.
//!
//! Idle until the cooldown has run out and a random draw clears the
//! threshold; then the light flashes for a fixed wall-clock duration and
//! returns to zero. The revert is checked on each frame rather than fired
//! from a separate timer, so there is no light object to outlive.

use crate::constants::{
    FILL_LIGHT_INTENSITY, FLASH_COOLDOWN_MIN_SEC, FLASH_COOLDOWN_SPAN_SEC, FLASH_INTENSITY_MIN,
    FLASH_INTENSITY_SPAN, FLASH_REVERT_MS, FLASH_THRESHOLD, FRAME_STEP_SEC, KEY_LIGHT_POSITION,
};
use glam::Vec3;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

/// Adapts any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientParams {
    /// Cooldown decrement applied per frame.
    pub frame_step: f32,
    pub threshold: f32,
    pub intensity_min: f32,
    pub intensity_span: f32,
    pub cooldown_min: f32,
    pub cooldown_span: f32,
    pub revert_after: Duration,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            frame_step: FRAME_STEP_SEC,
            threshold: FLASH_THRESHOLD,
            intensity_min: FLASH_INTENSITY_MIN,
            intensity_span: FLASH_INTENSITY_SPAN,
            cooldown_min: FLASH_COOLDOWN_MIN_SEC,
            cooldown_span: FLASH_COOLDOWN_SPAN_SEC,
            revert_after: Duration::from_millis(FLASH_REVERT_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientPhase {
    Idle,
    Flashing { since: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLightState {
    pub intensity: f32,
    pub cooldown: f32,
    pub phase: AmbientPhase,
}

impl Default for AmbientLightState {
    fn default() -> Self {
        Self {
            intensity: 0.0,
            cooldown: 0.0,
            phase: AmbientPhase::Idle,
        }
    }
}

/// Lights as the renderer should place them this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    /// Flashing directional light.
    pub key_position: Vec3,
    pub key_intensity: f32,
    /// Constant dim fill.
    pub fill_intensity: f32,
}

impl LightRig {
    pub fn with_key_intensity(key_intensity: f32) -> Self {
        Self {
            key_position: Vec3::from(KEY_LIGHT_POSITION),
            key_intensity,
            fill_intensity: FILL_LIGHT_INTENSITY,
        }
    }
}

pub struct AmbientScheduler<R: RandomSource> {
    params: AmbientParams,
    rng: R,
    state: AmbientLightState,
}

impl<R: RandomSource> AmbientScheduler<R> {
    pub fn new(params: AmbientParams, rng: R) -> Self {
        Self {
            params,
            rng,
            state: AmbientLightState::default(),
        }
    }

    pub fn state(&self) -> AmbientLightState {
        self.state
    }

    pub fn intensity(&self) -> f32 {
        self.state.intensity
    }

    pub fn light_rig(&self) -> LightRig {
        LightRig::with_key_intensity(self.state.intensity)
    }

    pub fn is_flashing(&self) -> bool {
        matches!(self.state.phase, AmbientPhase::Flashing { .. })
    }

    /// Advance one frame. Returns true if a flash started on this frame.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let AmbientPhase::Flashing { since } = self.state.phase {
            if now.saturating_duration_since(since) >= self.params.revert_after {
                self.state.intensity = 0.0;
                self.state.phase = AmbientPhase::Idle;
            }
        }

        self.state.cooldown -= self.params.frame_step;
        if self.state.cooldown > 0.0 || self.rng.next_unit() <= self.params.threshold {
            return false;
        }

        let p = &self.params;
        self.state.intensity = p.intensity_min + self.rng.next_unit() * p.intensity_span;
        self.state.cooldown = p.cooldown_min + self.rng.next_unit() * p.cooldown_span;
        self.state.phase = AmbientPhase::Flashing { since: now };
        log::debug!(
            "[ambient] flash intensity={:.2} next_cooldown={:.2}s",
            self.state.intensity,
            self.state.cooldown
        );
        true
    }
}
