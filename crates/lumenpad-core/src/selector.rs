//! A draggable handle constrained to a circle.

use kurbo::Point;

use crate::color::{Rgb, hue_color};
use crate::geometry::{
    GeometryError, angle_to_point, clamp_to_ring, point_to_angle_degrees, require_positive,
};

/// Radius of a ring selector handle.
pub const SELECTOR_RADIUS: f64 = 20.0;
/// Border width of a ring selector handle.
pub const SELECTOR_BORDER_WIDTH: f64 = 3.0;

/// Result of one drag frame on a ring selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorDrag {
    /// Accepted handle centre, on the ring.
    pub position: Point,
    /// Value to report, in [0, 360).
    pub degrees: f64,
}

/// Maps between an angle and a handle centre on a circle.
///
/// The selector is controlled: it holds no value, only the circle it runs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSelector {
    centre: Point,
    radius: f64,
}

impl RingSelector {
    pub fn new(centre: Point, radius: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            centre,
            radius: require_positive("selector radius", radius)?,
        })
    }

    pub(crate) fn new_unchecked(centre: Point, radius: f64) -> Self {
        Self { centre, radius }
    }

    pub fn centre(&self) -> Point {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Handle centre for `degrees`. Values outside [0, 360) wrap naturally.
    pub fn position_for(&self, degrees: f64) -> Point {
        angle_to_point(degrees, self.centre, self.radius)
    }

    /// Constrain a raw handle position to the ring and derive its angle.
    pub fn drag(&self, raw: Point) -> SelectorDrag {
        let position = clamp_to_ring(raw, self.centre, self.radius);
        SelectorDrag {
            position,
            degrees: point_to_angle_degrees(position, self.centre),
        }
    }

    /// Whether `point` lands on the handle drawn for `degrees`.
    pub fn hit_test(&self, degrees: f64, point: Point, handle_radius: f64) -> bool {
        self.position_for(degrees).distance(point) <= handle_radius
    }

    /// Handle fill: the hue under the handle.
    pub fn fill_color(degrees: f64) -> Rgb {
        hue_color(degrees)
    }
}
