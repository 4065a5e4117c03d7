//! Panel state owned by the host and the JSON messages exchanged with the device.
//!
//! Outbound changes are `control_update` envelopes. The device answers with
//! periodic `state` broadcasts which are folded back into the panel state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::{Rgb, hsl_to_rgb};
use crate::geometry::{normalize_degrees, normalize_fraction};

/// Lower end of the default scale range.
pub const DEFAULT_SCALE_MIN: f64 = 1.0;
/// Upper end of the default scale range.
pub const DEFAULT_SCALE_MAX: f64 = 4.0;

/// Control errors.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("control {control} expects a {expected} value")]
    WrongKind {
        control: Control,
        expected: &'static str,
    },
    #[error("non-finite value for control {0}")]
    NonFinite(Control),
    #[error("malformed message: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Every parameter the device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    WhiteHue,
    BlackHue,
    Hue,
    Saturation,
    Brightness,
    Fade,
    ColorCycle,
    Scale,
    ScaleEnabled,
}

impl Control {
    /// Name used on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Control::WhiteHue => "white_hue",
            Control::BlackHue => "black_hue",
            Control::Hue => "hue",
            Control::Saturation => "saturation",
            Control::Brightness => "brightness",
            Control::Fade => "fade",
            Control::ColorCycle => "color_cycle",
            Control::Scale => "scale",
            Control::ScaleEnabled => "scale_enabled",
        }
    }

    fn is_flag(self) -> bool {
        matches!(self, Control::ColorCycle | Control::ScaleEnabled)
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A control's value: numeric, or on/off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Flag(bool),
    Number(f64),
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ControlValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Discriminator of outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    ControlUpdate,
}

/// Outbound `{type, control, value, timestamp}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub control: Control,
    pub value: ControlValue,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl ControlMessage {
    /// Message stamped with the current time.
    pub fn now(control: Control, value: impl Into<ControlValue>) -> Self {
        Self::at(control, value, now_millis())
    }

    pub fn at(control: Control, value: impl Into<ControlValue>, timestamp: u64) -> Self {
        Self {
            kind: MessageKind::ControlUpdate,
            control,
            value: value.into(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, ControlError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// State broadcast by the device. Absent fields leave the panel untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateBroadcast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_cycle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_enabled: Option<bool>,
}

/// Messages received from the device controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Periodic full or partial state.
    State(StateBroadcast),
    /// Echo of a control change.
    ControlUpdate {
        control: Control,
        value: ControlValue,
        #[serde(default)]
        timestamp: u64,
    },
}

impl ServerMessage {
    pub fn from_json(text: &str) -> Result<Self, ControlError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Every value the panel shows. The host owns this; widgets only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPanelState {
    pub white_hue: f64,
    pub black_hue: f64,
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub fade: f64,
    pub color_cycle: bool,
    pub scale: f64,
    pub scale_enabled: bool,
    pub scale_min: f64,
    pub scale_max: f64,
}

impl Default for ControlPanelState {
    fn default() -> Self {
        Self {
            white_hue: 0.0,
            black_hue: 180.0,
            hue: 180.0,
            saturation: 1.0,
            brightness: 0.5,
            fade: 1.0,
            color_cycle: false,
            scale: DEFAULT_SCALE_MIN,
            scale_enabled: false,
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
        }
    }
}

impl ControlPanelState {
    /// State with a custom scale range. An empty or non-finite range is ignored.
    pub fn with_scale_range(mut self, min: f64, max: f64) -> Self {
        if min.is_finite() && max.is_finite() && min < max {
            self.scale_min = min;
            self.scale_max = max;
            self.scale = self.clamp_scale(self.scale);
        }
        self
    }

    fn clamp_scale(&self, value: f64) -> f64 {
        value.max(self.scale_min).min(self.scale_max)
    }

    /// Current value of a control.
    pub fn get(&self, control: Control) -> ControlValue {
        match control {
            Control::WhiteHue => self.white_hue.into(),
            Control::BlackHue => self.black_hue.into(),
            Control::Hue => self.hue.into(),
            Control::Saturation => self.saturation.into(),
            Control::Brightness => self.brightness.into(),
            Control::Fade => self.fade.into(),
            Control::ColorCycle => self.color_cycle.into(),
            Control::Scale => self.scale.into(),
            Control::ScaleEnabled => self.scale_enabled.into(),
        }
    }

    /// Set a control, normalizing into its domain.
    pub fn apply(&mut self, control: Control, value: ControlValue) -> Result<(), ControlError> {
        match (control.is_flag(), value) {
            (true, ControlValue::Flag(flag)) => {
                match control {
                    Control::ColorCycle => self.color_cycle = flag,
                    _ => self.scale_enabled = flag,
                }
                Ok(())
            }
            (false, ControlValue::Number(number)) => {
                if !number.is_finite() {
                    return Err(ControlError::NonFinite(control));
                }
                match control {
                    Control::WhiteHue => self.white_hue = normalize_degrees(number),
                    Control::BlackHue => self.black_hue = normalize_degrees(number),
                    Control::Hue => self.hue = normalize_degrees(number),
                    Control::Saturation => self.saturation = normalize_fraction(number),
                    Control::Brightness => self.brightness = normalize_fraction(number),
                    Control::Fade => self.fade = normalize_fraction(number),
                    _ => self.scale = self.clamp_scale(number),
                }
                Ok(())
            }
            (true, ControlValue::Number(_)) => Err(ControlError::WrongKind {
                control,
                expected: "boolean",
            }),
            (false, ControlValue::Flag(_)) => Err(ControlError::WrongKind {
                control,
                expected: "numeric",
            }),
        }
    }

    /// Apply a local change and build the message announcing it.
    pub fn update(
        &mut self,
        control: Control,
        value: impl Into<ControlValue>,
    ) -> Result<ControlMessage, ControlError> {
        self.apply(control, value.into())?;
        let message = ControlMessage::now(control, self.get(control));
        log::debug!("control update {} = {:?}", control, message.value);
        Ok(message)
    }

    /// Fold a device state broadcast into the panel.
    pub fn apply_broadcast(&mut self, state: &StateBroadcast) -> Result<(), ControlError> {
        let numbers = [
            (Control::WhiteHue, state.white_hue),
            (Control::BlackHue, state.black_hue),
            (Control::Hue, state.hue),
            (Control::Saturation, state.saturation),
            (Control::Brightness, state.brightness),
            (Control::Fade, state.fade),
            (Control::Scale, state.scale),
        ];
        for (control, value) in numbers {
            if let Some(value) = value {
                self.apply(control, ControlValue::Number(value))?;
            }
        }
        if let Some(flag) = state.color_cycle {
            self.color_cycle = flag;
        }
        if let Some(flag) = state.scale_enabled {
            self.scale_enabled = flag;
        }
        Ok(())
    }

    pub fn apply_server_message(&mut self, message: &ServerMessage) -> Result<(), ControlError> {
        match message {
            ServerMessage::State(state) => {
                log::debug!("device state broadcast: {state:?}");
                self.apply_broadcast(state)
            }
            ServerMessage::ControlUpdate { control, value, .. } => self.apply(*control, *value),
        }
    }

    /// Decode and apply raw JSON from the device. Rejected messages leave the state unchanged.
    pub fn apply_server_json(&mut self, text: &str) -> Result<(), ControlError> {
        let message = ServerMessage::from_json(text).inspect_err(|e| {
            log::warn!("Failed to parse server message: {e}");
        })?;
        let mut next = self.clone();
        next.apply_server_message(&message).inspect_err(|e| {
            log::warn!("Rejected server message: {e}");
        })?;
        *self = next;
        Ok(())
    }

    /// Color of the white wheel channel at the current saturation and brightness.
    pub fn white_rgb(&self) -> Rgb {
        hsl_to_rgb(self.white_hue, self.saturation, self.brightness)
    }

    /// Color of the black wheel channel at the current saturation and brightness.
    pub fn black_rgb(&self) -> Rgb {
        hsl_to_rgb(self.black_hue, self.saturation, self.brightness)
    }

    pub fn white_color(&self) -> String {
        self.white_rgb().to_css()
    }

    pub fn black_color(&self) -> String {
        self.black_rgb().to_css()
    }

    /// Solid color from hue, saturation and brightness.
    pub fn current_color(&self) -> String {
        hsl_to_rgb(self.hue, self.saturation, self.brightness).to_css()
    }

    /// Current color with fade as alpha.
    pub fn current_color_with_fade(&self) -> String {
        hsl_to_rgb(self.hue, self.saturation, self.brightness).to_css_with_alpha(self.fade)
    }
}
