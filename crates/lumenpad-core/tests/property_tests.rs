//! Property tests for the widget geometry.
//!
//! Uses proptest to verify:
//! 1. Ring clamping always lands on the ring
//! 2. Angle ↔ point mappings are inverse
//! 3. Slider value → position → value round-trips, linear and fade
//! 4. Scale slider zones: off means off, extremes hit the range ends

use kurbo::Point;
use lumenpad_core::geometry::{angle_to_point, clamp_to_ring, point_to_angle_degrees};
use lumenpad_core::scale::{ScaleSlider, ToggleState};
use lumenpad_core::slider::{LinearSlider, ValueMap};
use lumenpad_core::wheel::WheelGeometry;
use proptest::prelude::*;

const EPS: f64 = 1e-6;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_point() -> impl Strategy<Value = Point> {
    (-2000.0..2000.0_f64, -2000.0..2000.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_radius() -> impl Strategy<Value = f64> {
    1.0..500.0_f64
}

fn arb_fraction() -> impl Strategy<Value = f64> {
    0.0..=1.0_f64
}

fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

// ── 1. Ring clamp ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn clamp_lands_on_ring(p in arb_point(), c in arb_point(), r in arb_radius()) {
        let clamped = clamp_to_ring(p, c, r);
        prop_assert!(clamped.x.is_finite() && clamped.y.is_finite());
        prop_assert!((clamped.distance(c) - r).abs() < EPS * r.max(1.0));
    }

    #[test]
    fn clamp_at_centre_is_deterministic(c in arb_point(), r in arb_radius()) {
        prop_assert_eq!(clamp_to_ring(c, c, r), Point::new(c.x + r, c.y));
    }
}

// ── 2. Angle round trip ──────────────────────────────────────────────

proptest! {
    #[test]
    fn angle_round_trip(d in 0.0..360.0_f64, c in arb_point(), r in arb_radius()) {
        let back = point_to_angle_degrees(angle_to_point(d, c, r), c);
        prop_assert!((0.0..360.0).contains(&back));
        prop_assert!(angle_distance(back, d) < EPS);
    }

    #[test]
    fn wheel_drag_reports_in_range(p in arb_point(), size in 200.0..800.0_f64) {
        let geometry = WheelGeometry::new(size, 30.0).unwrap();
        let drag = geometry.selector().drag(p);
        prop_assert!((0.0..360.0).contains(&drag.degrees));
        prop_assert!((drag.position.distance(geometry.centre()) - geometry.selector_radius()).abs() < EPS);
    }
}

// ── 3. Linear sliders ────────────────────────────────────────────────

proptest! {
    #[test]
    fn linear_round_trip(v in arb_fraction(), length in 100.0..2000.0_f64) {
        for slider in [LinearSlider::horizontal(length).unwrap(), LinearSlider::vertical(length).unwrap()] {
            let back = slider.drag(slider.handle_position(v)).value;
            prop_assert!((back - v).abs() < EPS);
        }
    }

    #[test]
    fn fade_round_trip(v in arb_fraction(), length in 100.0..2000.0_f64) {
        let slider = LinearSlider::horizontal(length).unwrap().with_value_map(ValueMap::fade()).unwrap();
        let back = slider.drag(slider.handle_position(v)).value;
        prop_assert!((back - v).abs() < EPS);
    }

    #[test]
    fn slider_never_emits_out_of_range(p in arb_point(), length in 100.0..2000.0_f64) {
        let slider = LinearSlider::horizontal(length).unwrap();
        let value = slider.drag(p).value;
        prop_assert!((0.0..=1.0).contains(&value));
    }
}

// ── 4. Scale slider ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn off_zone_always_off(
        offset in 0.0..1.0_f64,
        prior in any::<bool>(),
        min in -10.0..10.0_f64,
        span in 0.5..10.0_f64,
    ) {
        let s = ScaleSlider::new(354.0, min, min + span).unwrap();
        let x = s.track().min_position() + offset * (s.off_zone() - 1e-9);
        let drag = s.drag(Point::new(x, 0.0), ToggleState::from_enabled(prior));
        prop_assert_eq!(drag.toggle, ToggleState::Off);
        prop_assert_eq!(drag.value, None);
        prop_assert_eq!(drag.toggled, prior);
    }

    #[test]
    fn active_zone_stays_in_range(x in -1000.0..1000.0_f64, min in -10.0..10.0_f64, span in 0.5..10.0_f64) {
        let s = ScaleSlider::new(354.0, min, min + span).unwrap();
        if let Some(value) = s.drag(Point::new(x, 0.0), ToggleState::Off).value {
            prop_assert!(value >= min && value <= min + span);
        }
    }

    #[test]
    fn scale_extremes(min in -10.0..10.0_f64, span in 0.5..10.0_f64) {
        let s = ScaleSlider::new(354.0, min, min + span).unwrap();
        let right = s.drag(Point::new(s.track().max_position(), 0.0), ToggleState::On);
        prop_assert_eq!(right.toggle, ToggleState::On);
        prop_assert!((right.value.unwrap() - (min + span)).abs() < EPS);
        let left = s.drag(Point::new(s.active_start(), 0.0), ToggleState::On);
        prop_assert_eq!(left.value, Some(min));
    }
}

#[test]
fn scale_scenario_one_to_four() {
    let s = ScaleSlider::new(354.0, 1.0, 4.0).unwrap();
    let drag = s.drag(Point::new(s.track().max_position(), 0.0), ToggleState::Off);
    assert_eq!(drag.value, Some(4.0));
    assert_eq!(drag.toggle, ToggleState::On);
}
