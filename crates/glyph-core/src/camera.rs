//! Camera description and the camera-follow controller.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_LERP, CAMERA_START, CAMERA_ZFAR, CAMERA_ZNEAR, FOCUS_DEPTH,
};
use crate::spring::{Spring, SpringConfig};
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a normalized device coordinate (x right, y up, both in [-1, 1]).
    ///
    /// Returns `(origin, direction)`; `None` if the camera matrices are degenerate.
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Option<(Vec3, Vec3)> {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        if p_far.w.abs() <= f32::EPSILON {
            return None;
        }
        let far: Vec3 = p_far.truncate() / p_far.w;
        let dir = (far - self.eye).normalize_or_zero();
        (dir != Vec3::ZERO && dir.is_finite()).then_some((self.eye, dir))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFollowParams {
    pub focus_depth: f32,
    /// Per-frame blend of the camera position toward the eased target.
    pub lerp_rate: f32,
    pub spring: SpringConfig,
}

impl Default for CameraFollowParams {
    fn default() -> Self {
        Self {
            focus_depth: FOCUS_DEPTH,
            lerp_rate: CAMERA_LERP,
            spring: SpringConfig::camera(),
        }
    }
}

/// Eases the camera toward the glyph that most recently took focus.
///
/// The target always sits at the focus depth; it starts straight ahead of
/// `start` and the position eases in from there. Focus requests only move the
/// spring target; with no focus the target stays where it was last put.
#[derive(Clone, Debug)]
pub struct CameraFollow {
    params: CameraFollowParams,
    target: Spring<Vec3>,
    position: Vec3,
}

impl CameraFollow {
    pub fn new(start: Vec3, params: CameraFollowParams) -> Self {
        Self {
            params,
            target: Spring::new(
                Vec3::new(start.x, start.y, params.focus_depth),
                params.spring,
            ),
            position: start,
        }
    }

    pub fn on_focus(&mut self, world_pos: Vec3) {
        self.target.set_target(Vec3::new(
            world_pos.x,
            world_pos.y,
            self.params.focus_depth,
        ));
    }

    /// The requested (un-eased) target.
    pub fn pending_target(&self) -> Vec3 {
        self.target.target()
    }

    /// The spring-eased target the position is chasing.
    pub fn eased_target(&self) -> Vec3 {
        self.target.value()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Advance the target spring by `dt` and blend the position toward it.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let eased = self.target.advance(dt);
        self.position = self.position.lerp(eased, self.params.lerp_rate);
        self.position
    }

    /// Write position and look-at into `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.position;
        camera.target = Vec3::ZERO;
    }
}
