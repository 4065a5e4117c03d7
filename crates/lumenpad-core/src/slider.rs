//! One-dimensional sliders: vertical, horizontal, and the shared track math.
//!
//! Positions are handle anchors: the top-left corner of the square box the
//! handle is drawn in. The handle's centre sits `OUTER_R` further along each
//! axis. Values run 0..1, with 1 at the right (horizontal) or top (vertical).

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::geometry::{GeometryError, clamp_to_segment, normalize_fraction, require_positive};

/// Radius of the inner edge of the handle glow rings.
pub const INNER_R: f64 = 18.0;
/// Radius of the handle's outer glow ring; the handle box is twice this.
pub const OUTER_R: f64 = INNER_R + 18.0;
/// Radius of the solid dot at the handle centre.
pub const THUMB_DOT_RADIUS: f64 = 8.0;
/// Thickness of the drawn track bar.
pub const BAR_THICKNESS: f64 = 2.0;
/// Exponent of the perceptual fade curve.
pub const FADE_EXPONENT: f64 = 3.2;

/// Direction a slider runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Mapping between the stored value and the displayed (dragged) value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueMap {
    #[default]
    Linear,
    /// displayed = stored^(1/exponent)
    Power { exponent: f64 },
}

impl ValueMap {
    /// The perceptual fade curve.
    pub fn fade() -> Self {
        Self::Power {
            exponent: FADE_EXPONENT,
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Self::Linear => Ok(()),
            Self::Power { exponent } => require_positive("value map exponent", *exponent).map(|_| ()),
        }
    }

    /// Stored value to displayed value.
    pub fn to_display(&self, stored: f64) -> f64 {
        let stored = normalize_fraction(stored);
        match self {
            Self::Linear => stored,
            Self::Power { exponent } => stored.powf(1.0 / exponent),
        }
    }

    /// Displayed value back to the stored value.
    pub fn from_display(&self, displayed: f64) -> f64 {
        let displayed = normalize_fraction(displayed);
        match self {
            Self::Linear => displayed,
            Self::Power { exponent } => displayed.powf(*exponent),
        }
    }
}

/// Layout of a straight track of a given length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    length: f64,
}

impl Track {
    pub fn new(length: f64) -> Result<Self, GeometryError> {
        let track = Self {
            length: require_positive("track length", length)?,
        };
        require_positive("usable track length", track.usable_length())?;
        Ok(track)
    }

    /// Full extent of the widget along its axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Extent of the widget across its axis.
    pub fn thickness() -> f64 {
        OUTER_R * 2.0 + 4.0
    }

    /// Length the handle can travel.
    pub fn usable_length(&self) -> f64 {
        self.length - 2.0 * OUTER_R - 2.0
    }

    /// Along-axis coordinate where the bar starts.
    pub fn start(&self) -> f64 {
        Self::thickness() / 2.0
    }

    /// Cross-axis coordinate of the bar's centre line.
    pub fn middle() -> f64 {
        1.0 + Self::thickness() / 2.0
    }

    /// Smallest handle anchor along the axis.
    pub fn min_position(&self) -> f64 {
        self.start() - OUTER_R
    }

    /// Largest handle anchor along the axis.
    pub fn max_position(&self) -> f64 {
        self.start() + self.usable_length() - OUTER_R
    }

    /// Drag bound along the axis.
    pub fn clamp(&self, pos: f64) -> f64 {
        clamp_to_segment(pos, self.min_position(), self.max_position())
    }

    /// Fraction of travel for an anchor, 0 at the track start.
    pub fn fraction_at(&self, pos: f64) -> f64 {
        (pos - self.min_position()) / self.usable_length()
    }

    /// Anchor for a fraction of travel.
    pub fn position_at(&self, fraction: f64) -> f64 {
        self.min_position() + self.usable_length() * fraction
    }
}

/// Result of one drag frame on a linear slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDrag {
    /// Accepted handle anchor.
    pub position: Point,
    /// Stored value to report, in [0, 1].
    pub value: f64,
}

/// A controlled slider along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSlider {
    axis: Axis,
    track: Track,
    value_map: ValueMap,
}

impl LinearSlider {
    pub fn new(axis: Axis, length: f64) -> Result<Self, GeometryError> {
        Ok(Self {
            axis,
            track: Track::new(length)?,
            value_map: ValueMap::Linear,
        })
    }

    pub fn horizontal(width: f64) -> Result<Self, GeometryError> {
        Self::new(Axis::Horizontal, width)
    }

    pub fn vertical(height: f64) -> Result<Self, GeometryError> {
        Self::new(Axis::Vertical, height)
    }

    pub fn with_value_map(mut self, value_map: ValueMap) -> Result<Self, GeometryError> {
        value_map.validate()?;
        self.value_map = value_map;
        Ok(self)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn value_map(&self) -> ValueMap {
        self.value_map
    }

    /// Displayed fraction for a stored value; this is what the filled bar shows.
    pub fn display_fraction(&self, value: f64) -> f64 {
        self.value_map.to_display(value)
    }

    /// Handle anchor for a stored value.
    pub fn handle_position(&self, value: f64) -> Point {
        let shown = self.display_fraction(value);
        let cross = Track::middle() - OUTER_R;
        match self.axis {
            Axis::Horizontal => Point::new(self.track.position_at(shown), cross),
            Axis::Vertical => Point::new(cross, self.track.position_at(1.0 - shown)),
        }
    }

    /// Handle centre for a stored value.
    pub fn handle_centre(&self, value: f64) -> Point {
        let anchor = self.handle_position(value);
        Point::new(anchor.x + OUTER_R, anchor.y + OUTER_R)
    }

    /// Drag bound: clamp along the axis, pin the cross axis.
    pub fn clamp(&self, raw: Point) -> Point {
        let cross = Track::middle() - OUTER_R;
        match self.axis {
            Axis::Horizontal => Point::new(self.track.clamp(raw.x), cross),
            Axis::Vertical => Point::new(cross, self.track.clamp(raw.y)),
        }
    }

    /// Stored value for an accepted handle anchor.
    pub fn value_at(&self, position: Point) -> f64 {
        let displayed = match self.axis {
            Axis::Horizontal => self.track.fraction_at(position.x),
            Axis::Vertical => 1.0 - self.track.fraction_at(position.y),
        };
        self.value_map.from_display(displayed)
    }

    /// Clamp a raw handle position and derive the value to report.
    pub fn drag(&self, raw: Point) -> SliderDrag {
        let position = self.clamp(raw);
        SliderDrag {
            position,
            value: self.value_at(position),
        }
    }
}
