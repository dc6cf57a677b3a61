use crate::ambient::AmbientParams;
use crate::camera::{Camera, CameraFollowParams};
use crate::constants::DEFAULT_TEXT;
use crate::layout::LayoutOptions;
use crate::proximity::ProximityParams;
use crate::spring::SpringConfig;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("layout gap must be finite and non-negative, got {0}")]
    Gap(f32),
    #[error("{name} width must be finite and positive, got {value}")]
    Width { name: &'static str, value: f32 },
    #[error("proximity radius must be finite and positive, got {0}")]
    MaxDist(f32),
    #[error("focus ratio must lie in (0, 1], got {0}")]
    FocusRatio(f32),
    #[error("{name} spring needs positive mass and non-negative tension/friction, got {config:?}")]
    Spring {
        name: &'static str,
        config: SpringConfig,
    },
    #[error("focus depth must be finite and positive, got {0}")]
    FocusDepth(f32),
    #[error("camera {name} is out of range, got {value}")]
    Camera { name: &'static str, value: f32 },
    #[error("camera lerp rate must lie in (0, 1], got {0}")]
    LerpRate(f32),
    #[error("flash threshold must lie in [0, 1], got {0}")]
    FlashThreshold(f32),
    #[error("ambient {name} must be finite and non-negative, got {value}")]
    Ambient { name: &'static str, value: f32 },
}

/// Everything the scene needs besides glyph metrics and per-frame input.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub text: String,
    pub layout: LayoutOptions,
    pub proximity: ProximityParams,
    pub glyph_spring: SpringConfig,
    pub follow: CameraFollowParams,
    pub ambient: AmbientParams,
    pub camera: Camera,
    /// World-space origin of the glyph row.
    pub origin: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            layout: LayoutOptions::default(),
            proximity: ProximityParams::default(),
            glyph_spring: SpringConfig::glyph(),
            follow: CameraFollowParams::default(),
            ambient: AmbientParams::default(),
            camera: Camera::default(),
            origin: Vec3::ZERO,
        }
    }
}

fn check_spring(name: &'static str, config: SpringConfig) -> Result<(), ConfigError> {
    let ok = config.mass.is_finite()
        && config.mass > 0.0
        && config.tension.is_finite()
        && config.tension >= 0.0
        && config.friction.is_finite()
        && config.friction >= 0.0;
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Spring { name, config })
    }
}

fn check_width(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Width { name, value })
    }
}

fn check_camera(camera: &Camera) -> Result<(), ConfigError> {
    let bad = |name: &'static str, value: f32| Err(ConfigError::Camera { name, value });
    if !camera.eye.is_finite() {
        return bad("eye", camera.eye.length());
    }
    if !camera.aspect.is_finite() || camera.aspect <= 0.0 {
        return bad("aspect", camera.aspect);
    }
    if !(camera.fovy_radians > 0.0 && camera.fovy_radians < std::f32::consts::PI) {
        return bad("fovy", camera.fovy_radians);
    }
    if !camera.znear.is_finite() || camera.znear <= 0.0 {
        return bad("znear", camera.znear);
    }
    if !camera.zfar.is_finite() || camera.zfar <= camera.znear {
        return bad("zfar", camera.zfar);
    }
    Ok(())
}

fn check_ambient(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Ambient { name, value })
    }
}

impl SceneConfig {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !layout.gap.is_finite() || layout.gap < 0.0 {
            return Err(ConfigError::Gap(layout.gap));
        }
        check_width("fallback", layout.fallback_width)?;
        if !layout.skip_blanks {
            check_width("blank", layout.blank_width)?;
        }

        let prox = &self.proximity;
        if !prox.max_dist.is_finite() || prox.max_dist <= 0.0 {
            return Err(ConfigError::MaxDist(prox.max_dist));
        }
        if !(prox.focus_ratio > 0.0 && prox.focus_ratio <= 1.0) {
            return Err(ConfigError::FocusRatio(prox.focus_ratio));
        }

        check_spring("glyph", self.glyph_spring)?;
        check_spring("camera", self.follow.spring)?;
        if !self.follow.focus_depth.is_finite() || self.follow.focus_depth <= 0.0 {
            return Err(ConfigError::FocusDepth(self.follow.focus_depth));
        }
        check_camera(&self.camera)?;
        if !(self.follow.lerp_rate > 0.0 && self.follow.lerp_rate <= 1.0) {
            return Err(ConfigError::LerpRate(self.follow.lerp_rate));
        }

        let amb = &self.ambient;
        if !(0.0..=1.0).contains(&amb.threshold) {
            return Err(ConfigError::FlashThreshold(amb.threshold));
        }
        check_ambient("frame step", amb.frame_step)?;
        check_ambient("intensity min", amb.intensity_min)?;
        check_ambient("intensity span", amb.intensity_span)?;
        check_ambient("cooldown min", amb.cooldown_min)?;
        check_ambient("cooldown span", amb.cooldown_span)?;
        Ok(())
    }
}
