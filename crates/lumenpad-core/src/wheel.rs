//! Color wheel model: a hue annulus with two ring selectors and two preview arcs.

use kurbo::Point;

use crate::color::{Rgb, hue_color};
use crate::geometry::{GeometryError, require_positive};
use crate::selector::{RingSelector, SELECTOR_RADIUS, SelectorDrag};

/// Default band thickness of the hue ring.
pub const DEFAULT_WHEEL_THICKNESS: f64 = 30.0;
/// Gap between the hue ring's inner edge and the preview arcs.
pub const ARC_INSET: f64 = 20.0;
/// Horizontal shift separating the two preview half-disks.
pub const ARC_GAP: f64 = 8.0;
/// Stroke width of the preview arcs.
pub const ARC_STROKE_WIDTH: f64 = 5.0;
/// Number of slices the hue ring is drawn with.
pub const HUE_SLICES: usize = 360;

/// Which of the two wheel handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelChannel {
    White,
    Black,
}

impl WheelChannel {
    /// Draw order, back-most first.
    pub const DRAW_ORDER: [WheelChannel; 2] = [WheelChannel::White, WheelChannel::Black];

    /// Border color of the channel's handle.
    pub fn border_color(self) -> Rgb {
        match self {
            WheelChannel::White => Rgb::WHITE,
            WheelChannel::Black => Rgb::BLACK,
        }
    }
}

/// One wedge of the hue ring, spanning `[start_degrees, end_degrees]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSlice {
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub color: Rgb,
}

/// A 180° preview half-disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewArc {
    pub centre: Point,
    pub radius: f64,
    /// Start of the sweep; the arc covers `start_degrees..start_degrees + 180`.
    pub start_degrees: f64,
    pub stroke: Rgb,
}

/// Derived geometry of a color wheel of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    size: f64,
    thickness: f64,
}

impl WheelGeometry {
    pub fn new(size: f64, thickness: f64) -> Result<Self, GeometryError> {
        let geometry = Self {
            size: require_positive("wheel size", size)?,
            thickness: require_positive("wheel thickness", thickness)?,
        };
        require_positive("wheel inner radius", geometry.inner_radius())?;
        require_positive("preview arc radius", geometry.arc_radius())?;
        Ok(geometry)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Outer radius of the hue ring.
    pub fn main_radius(&self) -> f64 {
        self.size / 2.0 - self.thickness / 2.0
    }

    /// Shared centre coordinate (x and y) of the ring, selectors and arcs.
    pub fn centre_coord(&self) -> f64 {
        self.size / 2.0 - self.thickness / 4.0
    }

    pub fn centre(&self) -> Point {
        let c = self.centre_coord();
        Point::new(c, c)
    }

    /// Inner radius of the hue ring; the disk inside it is punched out.
    pub fn inner_radius(&self) -> f64 {
        self.main_radius() - self.thickness
    }

    /// Radius the selectors travel on, midway through the band.
    pub fn selector_radius(&self) -> f64 {
        self.main_radius() - self.thickness / 2.0
    }

    pub fn arc_radius(&self) -> f64 {
        self.inner_radius() - ARC_INSET
    }

    pub fn handle_radius(&self) -> f64 {
        SELECTOR_RADIUS
    }

    /// The ring both handles run on.
    pub fn selector(&self) -> RingSelector {
        // selector radius exceeds the validated inner radius
        RingSelector::new_unchecked(self.centre(), self.selector_radius())
    }

    /// Per-degree wedges; each overlaps its neighbours by a degree to hide seams.
    pub fn hue_slices(&self) -> Vec<HueSlice> {
        (0..HUE_SLICES)
            .map(|i| {
                let angle = i as f64;
                HueSlice {
                    start_degrees: angle - 1.0,
                    end_degrees: angle + 1.0,
                    color: hue_color(angle),
                }
            })
            .collect()
    }

    /// Preview half-disks: white channel on the left, black on the right.
    pub fn preview_arcs(&self) -> [PreviewArc; 2] {
        let c = self.centre();
        [
            PreviewArc {
                centre: Point::new(c.x - ARC_GAP, c.y),
                radius: self.arc_radius(),
                start_degrees: 90.0,
                stroke: Rgb::WHITE,
            },
            PreviewArc {
                centre: Point::new(c.x + ARC_GAP, c.y),
                radius: self.arc_radius(),
                start_degrees: -90.0,
                stroke: Rgb::BLACK,
            },
        ]
    }
}

/// A color wheel bound to two externally owned hue values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWheelModel {
    geometry: WheelGeometry,
    selector: RingSelector,
    disabled: bool,
}

impl ColorWheelModel {
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            selector: geometry.selector(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn selector(&self) -> &RingSelector {
        &self.selector
    }

    /// Handle centre for a channel's current value.
    pub fn handle_position(&self, value: f64) -> Point {
        self.selector.position_for(value)
    }

    /// Top-most handle under `point`, given both current values.
    pub fn hit_test(&self, point: Point, white: f64, black: f64) -> Option<WheelChannel> {
        if self.disabled {
            return None;
        }
        WheelChannel::DRAW_ORDER
            .iter()
            .rev()
            .copied()
            .find(|channel| {
                let value = match channel {
                    WheelChannel::White => white,
                    WheelChannel::Black => black,
                };
                self.selector
                    .hit_test(value, point, self.geometry.handle_radius())
            })
    }

    /// Drag frame for a handle. `None` while disabled.
    pub fn drag(&self, raw: Point) -> Option<SelectorDrag> {
        if self.disabled {
            return None;
        }
        Some(self.selector.drag(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_size_300_geometry() {
        let g = WheelGeometry::new(300.0, 30.0).unwrap();
        assert_eq!(g.main_radius(), 135.0);
        assert_eq!(g.centre_coord(), 142.5);
        assert_eq!(g.inner_radius(), 105.0);
        assert_eq!(g.selector_radius(), 120.0);
        assert_eq!(g.arc_radius(), 85.0);
    }

    #[test]
    fn test_selector_at_zero_renders_right_of_centre() {
        let wheel = ColorWheelModel::new(WheelGeometry::new(300.0, 30.0).unwrap());
        let p = wheel.handle_position(0.0);
        let centre = wheel.geometry().centre_coord();
        let radius = wheel.geometry().selector_radius();
        assert!((p.x - (centre + radius)).abs() < EPS);
        assert!((p.y - centre).abs() < EPS);
    }

    #[test]
    fn test_rejects_misconfiguration() {
        assert!(WheelGeometry::new(0.0, 30.0).is_err());
        assert!(WheelGeometry::new(300.0, -1.0).is_err());
        // band swallows the whole wheel
        assert!(WheelGeometry::new(100.0, 60.0).is_err());
    }

    #[test]
    fn test_hue_slices_cover_circle() {
        let slices = WheelGeometry::new(300.0, 30.0).unwrap().hue_slices();
        assert_eq!(slices.len(), 360);
        assert_eq!(slices[0].start_degrees, -1.0);
        assert_eq!(slices[359].end_degrees, 360.0);
        assert_eq!(slices[120].color, Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_preview_arcs_mirror() {
        let g = WheelGeometry::new(300.0, 30.0).unwrap();
        let [white, black] = g.preview_arcs();
        assert_eq!(white.centre.x, 142.5 - ARC_GAP);
        assert_eq!(black.centre.x, 142.5 + ARC_GAP);
        assert_eq!(white.start_degrees + 180.0, 270.0);
        assert_eq!(black.start_degrees + 180.0, 90.0);
        assert_eq!(white.stroke, Rgb::WHITE);
    }

    #[test]
    fn test_hit_test_prefers_top_handle() {
        let wheel = ColorWheelModel::new(WheelGeometry::new(300.0, 30.0).unwrap());
        let on_both = wheel.handle_position(45.0);
        assert_eq!(wheel.hit_test(on_both, 45.0, 45.0), Some(WheelChannel::Black));
        assert_eq!(wheel.hit_test(on_both, 45.0, 200.0), Some(WheelChannel::White));
        assert_eq!(wheel.hit_test(wheel.geometry().centre(), 45.0, 200.0), None);
    }

    #[test]
    fn test_disabled_is_inert() {
        let wheel = ColorWheelModel::new(WheelGeometry::new(300.0, 30.0).unwrap()).disabled(true);
        let on_white = wheel.handle_position(10.0);
        assert_eq!(wheel.hit_test(on_white, 10.0, 200.0), None);
        assert_eq!(wheel.drag(Point::new(0.0, 0.0)), None);
        // the value is still rendered where it was
        assert_eq!(wheel.handle_position(10.0), on_white);
    }
}
