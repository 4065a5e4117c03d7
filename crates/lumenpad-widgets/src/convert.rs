//! Conversions between widget-local kurbo geometry and egui screen space.

use egui::{Pos2, vec2};
use kurbo::Point;

/// Widget-local point to screen position.
pub(crate) fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    origin + vec2(point.x as f32, point.y as f32)
}

/// Screen position to widget-local point.
pub(crate) fn to_local(origin: Pos2, pos: Pos2) -> Point {
    let local = pos - origin;
    Point::new(f64::from(local.x), f64::from(local.y))
}

/// Point on a circle around a screen position, angle in degrees.
pub(crate) fn polar(centre: Pos2, radius: f32, degrees: f64) -> Pos2 {
    let rad = degrees.to_radians() as f32;
    Pos2::new(centre.x + radius * rad.cos(), centre.y + radius * rad.sin())
}
