// Host-side tests for the camera-follow controller.

use glam::Vec3;
use glyph_core::*;

const DT: f32 = 1.0 / 60.0;

fn follow() -> CameraFollow {
    CameraFollow::new(Vec3::from(CAMERA_START), CameraFollowParams::default())
}

#[test]
fn focus_sets_target_at_focus_depth() {
    let mut f = follow();
    f.on_focus(Vec3::new(-0.55, 0.12, 0.0));
    assert_eq!(f.pending_target(), Vec3::new(-0.55, 0.12, FOCUS_DEPTH));
    // nothing moves until the controller advances
    assert_eq!(f.position(), Vec3::from(CAMERA_START));
}

#[test]
fn fresh_controller_targets_focus_depth_and_eases_in() {
    let mut f = follow();
    assert_eq!(f.pending_target(), Vec3::new(0.0, 0.0, FOCUS_DEPTH));
    assert_eq!(f.eased_target(), f.pending_target());
    assert_eq!(f.position(), Vec3::from(CAMERA_START));

    let p = f.advance(DT);
    assert!(p.z < CAMERA_START[2]);
    for _ in 0..600 {
        f.advance(DT);
    }
    assert!((f.position().z - FOCUS_DEPTH).abs() < 1e-3);
}

#[test]
fn later_focus_overwrites_earlier_one() {
    let mut f = follow();
    f.on_focus(Vec3::new(-1.0, 0.0, 0.0));
    f.on_focus(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(f.pending_target().x, 1.0);
}

#[test]
fn position_blends_a_small_step_per_frame() {
    let mut f = follow();
    let start = f.position();
    f.on_focus(Vec3::new(1.0, 0.0, 0.0));
    let p = f.advance(DT);
    let eased = f.eased_target();
    let expected = start.lerp(eased, CAMERA_LERP);
    assert!(p.distance(expected) < 1e-6);
    assert!(p.x > 0.0 && p.x < 0.05);
    assert!(p.z < start.z);
}

#[test]
fn camera_converges_on_focused_glyph() {
    let mut f = follow();
    let goal = Vec3::new(-0.4, 0.1, FOCUS_DEPTH);
    f.on_focus(Vec3::new(-0.4, 0.1, 0.0));
    for _ in 0..600 {
        f.advance(DT);
    }
    assert!(f.position().distance(goal) < 1e-3, "{:?}", f.position());
}

#[test]
fn target_holds_without_focus() {
    let mut f = follow();
    f.on_focus(Vec3::new(0.3, 0.0, 0.0));
    for _ in 0..600 {
        f.advance(DT);
    }
    let held = f.pending_target();
    for _ in 0..120 {
        f.advance(DT);
    }
    assert_eq!(f.pending_target(), held);
    assert!(f.position().distance(held) < 1e-3);
}

#[test]
fn apply_keeps_the_camera_aimed_at_the_origin() {
    let mut f = follow();
    f.on_focus(Vec3::new(0.8, -0.2, 0.0));
    for _ in 0..30 {
        f.advance(DT);
    }
    let mut camera = Camera::default();
    f.apply(&mut camera);
    assert_eq!(camera.eye, f.position());
    assert_eq!(camera.target, Vec3::ZERO);
}
