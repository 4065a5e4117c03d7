//! LumenPad Core Library
//!
//! Platform-agnostic geometry, drag handling and control state for the LumenPad
//! lighting panel. Widgets are controlled: they map pointer positions to values
//! and report them, while the host owns every value.

pub mod color;
pub mod config;
pub mod control;
pub mod drag;
pub mod geometry;
pub mod scale;
pub mod selector;
pub mod slider;
pub mod wheel;

pub use color::{ColorError, Rgb, hsl_to_rgb, hue_color, parse_css_color};
pub use config::{ConfigError, PanelConfig, ScaleConfig, WheelConfig};
pub use control::{
    Control, ControlError, ControlMessage, ControlPanelState, ControlValue, ServerMessage,
    StateBroadcast,
};
pub use drag::DragState;
pub use geometry::{
    GeometryError, angle_to_point, clamp_to_ring, clamp_to_segment, point_to_angle_degrees,
};
pub use scale::{ScaleDrag, ScaleSlider, ToggleState};
pub use selector::{RingSelector, SelectorDrag};
pub use slider::{Axis, LinearSlider, SliderDrag, Track, ValueMap};
pub use wheel::{ColorWheelModel, WheelChannel, WheelGeometry};
