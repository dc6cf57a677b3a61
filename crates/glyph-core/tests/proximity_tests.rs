// Host-side tests for proximity lift/focus and the per-glyph animator.

use glam::Vec3;
use glyph_core::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn lift_is_max_at_zero_and_zero_past_the_radius() {
    let p = ProximityParams::default();
    assert!((p.lift_for_distance(0.0) - 0.2).abs() < 1e-6);
    assert_eq!(p.lift_for_distance(1.5), 0.0);
    assert_eq!(p.lift_for_distance(2.0), 0.0);
    assert_eq!(p.lift_for_distance(10.0), 0.0);
}

#[test]
fn lift_is_continuous_and_non_increasing() {
    let p = ProximityParams::default();
    let mut prev = p.lift_for_distance(0.0);
    for i in 1..=300 {
        let d = 1.5 * i as f32 / 300.0;
        let lift = p.lift_for_distance(d);
        assert!(lift <= prev, "lift rose at {d}");
        assert!(prev - lift < 0.002, "jump at {d}");
        prev = lift;
    }
    assert!(p.lift_for_distance(1.5 - 1e-4) < 1e-4);
}

#[test]
fn focus_threshold_is_half_the_radius() {
    let p = ProximityParams::default();
    assert!((p.focus_radius() - 0.75).abs() < 1e-6);
    assert!(p.has_focus(0.0));
    assert!(p.has_focus(0.7499));
    assert!(!p.has_focus(0.75));
    assert!(!p.has_focus(1.0));
}

#[test]
fn pointer_on_glyph_gives_full_lift_and_highlight() {
    let p = ProximityParams::default();
    let pos = Vec3::new(-0.55, 0.0, 0.0);
    let t = p.evaluate(pos, pos);
    assert!((t.lift - 0.2).abs() < 1e-6);
    assert!(t.has_focus);
    assert_eq!(t.color, highlight_color_vec3());
}

#[test]
fn distant_pointer_gives_base_state() {
    let p = ProximityParams::default();
    let t = p.evaluate(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(t.lift, 0.0);
    assert!(!t.has_focus);
    assert_eq!(t.color, base_color_vec3());
}

#[test]
fn animator_eases_toward_targets() {
    let p = ProximityParams::default();
    let mut anim = GlyphAnimator::new(p.base_color, SpringConfig::glyph());
    let target = p.evaluate(Vec3::ZERO, Vec3::ZERO);

    anim.update(target, DT);
    assert!(anim.has_focus());
    assert!(anim.lift() > 0.0 && anim.lift() < 0.2);
    assert_ne!(anim.color(), p.highlight_color);

    for _ in 0..180 {
        anim.update(target, DT);
    }
    assert!((anim.lift() - 0.2).abs() < 1e-3);
    assert!(anim.color().distance(p.highlight_color) < 1e-3);
}

#[test]
fn animator_returns_to_base_when_pointer_leaves() {
    let p = ProximityParams::default();
    let mut anim = GlyphAnimator::new(p.base_color, SpringConfig::glyph());
    let near = p.evaluate(Vec3::ZERO, Vec3::ZERO);
    let far = p.evaluate(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
    for _ in 0..60 {
        anim.update(near, DT);
    }
    for _ in 0..240 {
        anim.update(far, DT);
    }
    assert!(!anim.has_focus());
    assert!(anim.lift().abs() < 1e-3);
    assert!(anim.color().distance(p.base_color) < 1e-3);
    assert!(anim.is_settled());
}
