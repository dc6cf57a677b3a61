use glam::Vec3;

// Shared layout/animation tuning constants used by the scene and the native driver.

// Text
pub const DEFAULT_TEXT: &str = "Danton Mariano";
pub const GLYPH_SIZE: f32 = 0.5; // em size of one extruded glyph

// Layout
pub const GAP: f32 = 0.05; // spacing added after every glyph
pub const FALLBACK_WIDTH: f32 = 0.4; // width used until glyph geometry is measurable
pub const BLANK_WIDTH: f32 = 0.25; // placeholder width for blanks when they are kept

// Proximity
pub const MAX_DIST: f32 = 1.5; // pointer influence radius
pub const MAX_LIFT: f32 = 0.2; // lift at zero distance
pub const FOCUS_RATIO: f32 = 0.5; // focus radius as a fraction of MAX_DIST

// Glyph palette (sRGB, 0..1)
pub const BASE_COLOR: [f32; 3] = [0.839, 0.894, 1.0]; // #d6e4ff
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.31, 0.545]; // #ff4f8b

// Springs: (mass, tension, friction)
pub const GLYPH_SPRING: [f32; 3] = [1.0, 300.0, 20.0];
pub const CAMERA_SPRING: [f32; 3] = [1.0, 280.0, 60.0];
pub const SPRING_SUBSTEP_SEC: f32 = 0.001;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Camera
pub const FOCUS_DEPTH: f32 = 3.8; // camera z while following a glyph
pub const CAMERA_LERP: f32 = 0.05; // per-frame blend toward the eased target
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Ambient light
pub const FRAME_STEP_SEC: f32 = 0.016; // cooldown decrement per frame
pub const FLASH_THRESHOLD: f32 = 0.98; // draw must exceed this to flash
pub const FLASH_INTENSITY_MIN: f32 = 3.0;
pub const FLASH_INTENSITY_SPAN: f32 = 3.0;
pub const FLASH_COOLDOWN_MIN_SEC: f32 = 2.0;
pub const FLASH_COOLDOWN_SPAN_SEC: f32 = 4.0;
pub const FLASH_REVERT_MS: u64 = 100;
pub const KEY_LIGHT_POSITION: [f32; 3] = [-5.0, 5.0, 5.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.05;

#[inline]
pub fn base_color_vec3() -> Vec3 {
    Vec3::from(BASE_COLOR)
}

#[inline]
pub fn highlight_color_vec3() -> Vec3 {
    Vec3::from(HIGHLIGHT_COLOR)
}
