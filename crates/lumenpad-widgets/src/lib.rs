//! egui widgets for the LumenPad lighting panel.
//!
//! This crate renders the controlled widgets modelled in `lumenpad-core`:
//!
//! - **Wheel**: hue ring with two draggable selectors and preview arcs
//! - **Sliders**: vertical, horizontal and toggle/scale sliders with glowing handles
//! - **Buttons**: toggle buttons for on/off controls
//! - **Panel**: the composed control panel that turns drags into control messages
//!
//! Widgets never write to host state. Each `show` returns the values the user
//! asked for during this frame and the host decides what to keep.

pub mod buttons;
pub mod colors;
mod convert;
#[cfg(test)]
mod harness;
mod interact;
pub mod layout;
pub mod panel;
pub mod sliders;
pub mod wheel;

pub use buttons::ToggleButton;
pub use colors::{PreviewSwatch, paint_hue_ring, rgb_to_color32};
pub use layout::{section_label, separator, value_label};
pub use panel::ControlPanel;
pub use sliders::{ScaleChange, ScaleSlider, Slider};
pub use wheel::{ColorWheel, WheelChange};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Preview swatch size
    pub const SWATCH: f32 = 48.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Page background; the hue ring's centre is punched out with it.
    pub const BACKGROUND: Color32 = Color32::from_rgb(16, 24, 40);
    /// Text color
    pub const TEXT: Color32 = Color32::from_rgb(229, 231, 235);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
    /// Track outline
    pub const TRACK_STROKE: Color32 = Color32::from_rgb(238, 238, 238);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Fallback for colors that fail to parse
    pub const FALLBACK: Color32 = Color32::from_rgb(128, 128, 128);
}
