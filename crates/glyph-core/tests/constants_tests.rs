// Host-side tests for constants and their relationships.

use glyph_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(GAP >= 0.0);
    assert!(FALLBACK_WIDTH > 0.0);
    assert!(BLANK_WIDTH > 0.0);
    assert!(GLYPH_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn proximity_constants_have_logical_relationships() {
    assert!(MAX_DIST > 0.0);
    assert!(MAX_LIFT > 0.0);
    // focus region sits inside the lift region
    assert!(FOCUS_RATIO > 0.0 && FOCUS_RATIO < 1.0);
    assert_ne!(BASE_COLOR, HIGHLIGHT_COLOR);
    for c in BASE_COLOR.iter().chain(HIGHLIGHT_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_LERP > 0.0 && CAMERA_LERP <= 1.0);
    assert!(FOCUS_DEPTH > 0.0 && FOCUS_DEPTH < CAMERA_START[2]);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    // the camera spring is the heavier-damped preset
    assert!(CAMERA_SPRING[2] > GLYPH_SPRING[2]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flash_constants_keep_flashes_apart() {
    assert!(FLASH_THRESHOLD > 0.0 && FLASH_THRESHOLD < 1.0);
    assert!(FLASH_INTENSITY_MIN > 0.0);
    // a flash always reverts long before the next one may start
    assert!((FLASH_REVERT_MS as f32 / 1000.0) < FLASH_COOLDOWN_MIN_SEC);
    assert!(FRAME_STEP_SEC > 0.0);
}

#[test]
fn default_config_validates() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
}

#[test]
fn config_errors_name_the_problem() {
    let mut config = SceneConfig::default();
    config.glyph_spring.mass = 0.0;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Spring { name: "glyph", .. }));
    assert!(err.to_string().contains("glyph spring"));

    let mut config = SceneConfig::default();
    config.ambient.threshold = 1.5;
    assert_eq!(config.validate(), Err(ConfigError::FlashThreshold(1.5)));

    let mut config = SceneConfig::default();
    config.layout.fallback_width = f32::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Width { name: "fallback", .. })
    ));
}

#[test]
fn camera_settings_are_validated() {
    let mut config = SceneConfig::default();
    config.follow.focus_depth = f32::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::FocusDepth(_))));

    let mut config = SceneConfig::default();
    config.camera.fovy_radians = 0.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::Camera {
            name: "fovy",
            value: 0.0
        })
    );

    let mut config = SceneConfig::default();
    config.camera.aspect = f32::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Camera { name: "aspect", .. })
    ));

    let mut config = SceneConfig::default();
    config.camera.zfar = config.camera.znear;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Camera { name: "zfar", .. })
    ));
}
