//! Toggle-and-range slider.
//!
//! The track opens with a dead zone: resting the handle there switches the
//! control off. Past it, the handle maps linearly onto `[min, max]`.

use kurbo::Point;

use crate::geometry::{GeometryError, clamp_to_segment, require_positive};
use crate::slider::{OUTER_R, Track};

/// Default width of the off zone: one handle radius.
pub const DEFAULT_OFF_ZONE: f64 = OUTER_R;

/// On/off state of a scale slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleState {
    #[default]
    Off,
    On,
}

impl ToggleState {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Result of one drag frame on a scale slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleDrag {
    /// Accepted handle anchor.
    pub position: Point,
    /// State after this frame.
    pub toggle: ToggleState,
    /// Whether this frame crossed between the zones.
    pub toggled: bool,
    /// New value, only reported inside the active zone.
    pub value: Option<f64>,
}

/// A controlled on/off switch merged with a bounded linear slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSlider {
    track: Track,
    min_value: f64,
    max_value: f64,
    off_zone: f64,
}

impl ScaleSlider {
    pub fn new(width: f64, min_value: f64, max_value: f64) -> Result<Self, GeometryError> {
        if !(min_value.is_finite() && max_value.is_finite() && min_value < max_value) {
            return Err(GeometryError::EmptyRange {
                min: min_value,
                max: max_value,
            });
        }
        let slider = Self {
            track: Track::new(width)?,
            min_value,
            max_value,
            off_zone: DEFAULT_OFF_ZONE,
        };
        require_positive("active zone length", slider.active_length())?;
        Ok(slider)
    }

    /// Override the width of the off zone.
    pub fn with_off_zone(mut self, off_zone: f64) -> Result<Self, GeometryError> {
        self.off_zone = require_positive("off zone", off_zone)?;
        require_positive("active zone length", self.active_length())?;
        Ok(self)
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn off_zone(&self) -> f64 {
        self.off_zone
    }

    /// Handle anchor where the active zone begins; also the threshold mark.
    pub fn active_start(&self) -> f64 {
        self.track.min_position() + self.off_zone
    }

    pub fn active_length(&self) -> f64 {
        self.track.max_position() - self.active_start()
    }

    fn cross() -> f64 {
        Track::middle() - OUTER_R
    }

    /// Value clamped into `[min, max]`; NaN falls back to `min`.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min_value
        } else {
            value.clamp(self.min_value, self.max_value)
        }
    }

    /// Fraction of the active zone a value occupies.
    pub fn fraction(&self, value: f64) -> f64 {
        (self.normalize(value) - self.min_value) / (self.max_value - self.min_value)
    }

    /// Handle anchor for the current value and toggle.
    pub fn handle_position(&self, value: f64, toggle: ToggleState) -> Point {
        let x = match toggle {
            ToggleState::Off => self.track.min_position(),
            ToggleState::On => self.active_start() + self.active_length() * self.fraction(value),
        };
        Point::new(x, Self::cross())
    }

    /// Drag bound: clamp to the track and snap anything in the off zone to its start.
    pub fn clamp(&self, raw: Point) -> Point {
        let x = clamp_to_segment(raw.x, self.track.min_position(), self.track.max_position());
        let x = if x < self.active_start() {
            self.track.min_position()
        } else {
            x
        };
        Point::new(x, Self::cross())
    }

    /// Value for an anchor inside the active zone.
    pub fn value_at(&self, x: f64) -> f64 {
        let fraction = (x - self.active_start()) / self.active_length();
        let value = self.min_value + (self.max_value - self.min_value) * fraction;
        self.normalize(value)
    }

    /// Process one drag frame starting from `current` toggle state.
    pub fn drag(&self, raw: Point, current: ToggleState) -> ScaleDrag {
        let position = self.clamp(raw);
        let (toggle, value) = if position.x >= self.active_start() {
            (ToggleState::On, Some(self.value_at(position.x)))
        } else {
            (ToggleState::Off, None)
        };
        let toggled = toggle != current;
        if toggled {
            log::trace!("scale slider {current:?} -> {toggle:?}");
        }
        ScaleDrag {
            position,
            toggle,
            toggled,
            value,
        }
    }
}
