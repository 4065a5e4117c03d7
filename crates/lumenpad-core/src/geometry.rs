//! Pointer ↔ value geometry shared by every widget.
//!
//! All functions here are pure. Angles are in degrees and measured the way
//! screen coordinates run (y grows downward), so 90° sits below the centre.

use kurbo::{Point, Vec2};
use thiserror::Error;

/// Geometry misconfiguration, reported when a widget model is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be a positive finite length, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("empty range: min {min} must be below max {max}")]
    EmptyRange { min: f64, max: f64 },
}

/// Check that a length is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::NonPositive { name, value })
    }
}

/// Wrap an angle into [0, 360). Non-finite input maps to 0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp a fraction into [0, 1]. NaN maps to 0.
pub fn normalize_fraction(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Angle of `point` around `centre`, offset by 180° and wrapped into [0, 360).
pub fn point_to_angle_degrees(point: Point, centre: Point) -> f64 {
    let degrees = (centre.y - point.y).atan2(centre.x - point.x).to_degrees() + 180.0;
    normalize_degrees(degrees)
}

/// Point on the circle of `radius` around `centre` at `degrees`.
pub fn angle_to_point(degrees: f64, centre: Point, radius: f64) -> Point {
    let rad = degrees.to_radians();
    Point::new(centre.x + radius * rad.cos(), centre.y + radius * rad.sin())
}

/// Project `point` onto the circle of `radius` around `centre`.
///
/// A point sitting on the centre has no direction; it is pinned to 0°.
pub fn clamp_to_ring(point: Point, centre: Point, radius: f64) -> Point {
    let offset: Vec2 = point - centre;
    let distance = offset.hypot();
    if !distance.is_finite() || distance < f64::EPSILON {
        return angle_to_point(0.0, centre, radius);
    }
    centre + offset * (radius / distance)
}

/// Saturating one-dimensional clamp. `min` must not exceed `max`.
pub fn clamp_to_segment(pos: f64, min: f64, max: f64) -> f64 {
    if pos.is_nan() {
        return min;
    }
    pos.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_angle_zero_is_right_of_centre() {
        let c = Point::new(100.0, 100.0);
        let p = angle_to_point(0.0, c, 50.0);
        assert!((p.x - 150.0).abs() < EPS);
        assert!((p.y - 100.0).abs() < EPS);
        assert!(point_to_angle_degrees(p, c).abs() < EPS);
    }

    #[test]
    fn test_quadrants() {
        let c = Point::new(0.0, 0.0);
        assert!((point_to_angle_degrees(Point::new(0.0, 10.0), c) - 90.0).abs() < EPS);
        assert!((point_to_angle_degrees(Point::new(-10.0, 0.0), c) - 180.0).abs() < EPS);
        assert!((point_to_angle_degrees(Point::new(0.0, -10.0), c) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_stays_below_360() {
        let c = Point::new(0.0, 0.0);
        let just_above_axis = Point::new(10.0, -1e-15);
        let angle = point_to_angle_degrees(just_above_axis, c);
        assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn test_clamp_to_ring_rescales() {
        let c = Point::new(10.0, 10.0);
        let p = clamp_to_ring(Point::new(10.0, 100.0), c, 5.0);
        assert!((p.x - 10.0).abs() < EPS);
        assert!((p.y - 15.0).abs() < EPS);
    }

    #[test]
    fn test_clamp_to_ring_degenerate_centre() {
        let c = Point::new(10.0, 10.0);
        let p = clamp_to_ring(c, c, 5.0);
        assert_eq!(p, Point::new(15.0, 10.0));
    }

    #[test]
    fn test_clamp_to_segment_saturates() {
        assert_eq!(clamp_to_segment(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_to_segment(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp_to_segment(4.0, 0.0, 10.0), 4.0);
        assert_eq!(clamp_to_segment(f64::NAN, 2.0, 10.0), 2.0);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
        assert_eq!(normalize_fraction(1.5), 1.0);
        assert_eq!(normalize_fraction(-0.5), 0.0);
        assert_eq!(normalize_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("size", 1.0).is_ok());
        assert_eq!(
            require_positive("size", 0.0),
            Err(GeometryError::NonPositive { name: "size", value: 0.0 })
        );
        assert!(require_positive("size", f64::NAN).is_err());
    }
}
