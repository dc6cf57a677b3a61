//! Distance-to-pointer driven lift and color for a single glyph.

use crate::constants::{base_color_vec3, highlight_color_vec3, FOCUS_RATIO, MAX_DIST, MAX_LIFT};
use crate::spring::{Spring, SpringConfig};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityParams {
    pub max_dist: f32,
    pub max_lift: f32,
    /// Focus radius as a fraction of `max_dist`.
    pub focus_ratio: f32,
    pub base_color: Vec3,
    pub highlight_color: Vec3,
}

impl Default for ProximityParams {
    fn default() -> Self {
        Self {
            max_dist: MAX_DIST,
            max_lift: MAX_LIFT,
            focus_ratio: FOCUS_RATIO,
            base_color: base_color_vec3(),
            highlight_color: highlight_color_vec3(),
        }
    }
}

impl ProximityParams {
    pub fn focus_radius(&self) -> f32 {
        self.max_dist * self.focus_ratio
    }

    /// Linear falloff: `max_lift` at 0, zero from `max_dist` on.
    pub fn lift_for_distance(&self, dist: f32) -> f32 {
        if dist < self.max_dist {
            self.max_lift * (1.0 - dist / self.max_dist)
        } else {
            0.0
        }
    }

    pub fn has_focus(&self, dist: f32) -> bool {
        dist < self.focus_radius()
    }

    /// Targets for a glyph at `glyph_pos` with the pointer at `pointer_pos`.
    pub fn evaluate(&self, glyph_pos: Vec3, pointer_pos: Vec3) -> FocusTarget {
        let dist = glyph_pos.distance(pointer_pos);
        let has_focus = self.has_focus(dist);
        FocusTarget {
            lift: self.lift_for_distance(dist),
            color: if has_focus {
                self.highlight_color
            } else {
                self.base_color
            },
            has_focus,
        }
    }
}

/// What a glyph should animate toward this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTarget {
    pub lift: f32,
    pub color: Vec3,
    pub has_focus: bool,
}

/// Per-glyph spring state; persists across frames.
#[derive(Clone, Debug)]
pub struct GlyphAnimator {
    lift: Spring<f32>,
    color: Spring<Vec3>,
    has_focus: bool,
}

impl GlyphAnimator {
    pub fn new(base_color: Vec3, spring: SpringConfig) -> Self {
        Self {
            lift: Spring::new(0.0, spring),
            color: Spring::new(base_color, spring),
            has_focus: false,
        }
    }

    pub fn lift(&self) -> f32 {
        self.lift.value()
    }

    pub fn color(&self) -> Vec3 {
        self.color.value()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_settled(&self) -> bool {
        self.lift.is_settled() && self.color.is_settled()
    }

    /// Retarget both springs and step them by `dt`.
    pub fn update(&mut self, target: FocusTarget, dt: f32) {
        self.has_focus = target.has_focus;
        self.lift.set_target(target.lift);
        self.color.set_target(target.color);
        self.lift.advance(dt);
        self.color.advance(dt);
    }
}
