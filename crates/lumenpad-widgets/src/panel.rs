//! The composed lighting control panel.

use egui::Ui;
use lumenpad_core::scale::ScaleSlider as ScaleModel;
use lumenpad_core::{
    ConfigError, Control, ControlMessage, ControlPanelState, ControlValue, LinearSlider,
    PanelConfig, WheelGeometry,
};

use crate::buttons::ToggleButton;
use crate::colors::PreviewSwatch;
use crate::layout::{section_label, separator, value_label};
use crate::sliders::{ScaleSlider, Slider};
use crate::wheel::ColorWheel;

/// Largest hue the hue slider sends; a full 360 would wrap back to 0.
const HUE_MAX: f64 = 360.0 * (1.0 - f64::EPSILON);

/// Hue in degrees for a hue slider fraction.
fn hue_degrees(fraction: f64) -> f64 {
    (fraction * 360.0).min(HUE_MAX)
}

/// Every widget of the panel, laid out from one [`PanelConfig`].
///
/// `show` applies the user's changes to the host state and returns one
/// [`ControlMessage`] per accepted change, in the order they happened.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    wheel: WheelGeometry,
    brightness: LinearSlider,
    slider: LinearSlider,
    fade: LinearSlider,
    scale: ScaleModel,
}

impl ControlPanel {
    pub fn new(config: &PanelConfig) -> Result<Self, ConfigError> {
        let wheel = config.wheel_geometry()?;
        let brightness = LinearSlider::vertical(config.wheel.size).map_err(|source| {
            ConfigError::Geometry {
                section: "brightness",
                source,
            }
        })?;
        Ok(Self {
            wheel,
            brightness,
            slider: config.slider()?,
            fade: config.fade_slider()?,
            scale: config.scale_slider()?,
        })
    }

    pub fn show(
        &self,
        ui: &mut Ui,
        state: &mut ControlPanelState,
        enabled: bool,
    ) -> Vec<ControlMessage> {
        let mut outbox = Outbox::default();

        ui.horizontal(|ui| {
            let white_color = state.white_color();
            let black_color = state.black_color();
            let change = ColorWheel::new(self.wheel, state.white_hue, state.black_hue)
                .arc_colors(&white_color, &black_color)
                .disabled(!enabled)
                .show(ui);
            if let Some(degrees) = change.white {
                outbox.update(state, Control::WhiteHue, degrees);
            }
            if let Some(degrees) = change.black {
                outbox.update(state, Control::BlackHue, degrees);
            }

            if let Some(value) = Slider::new(self.brightness, state.brightness)
                .enabled(enabled)
                .id_salt(Control::Brightness)
                .show(ui)
            {
                outbox.update(state, Control::Brightness, value);
            }
        });

        separator(ui);

        let rows = [
            (Control::Hue, "Hue", self.slider, state.hue / 360.0),
            (Control::Saturation, "Saturation", self.slider, state.saturation),
            (Control::Fade, "Fade", self.fade, state.fade),
        ];
        for (control, label, model, value) in rows {
            value_label(ui, label, &format!("{:.0}%", model.display_fraction(value) * 100.0));
            if let Some(value) = Slider::new(model, value)
                .enabled(enabled)
                .id_salt(control)
                .show(ui)
            {
                // Hue is stored in degrees; the slider works in fractions.
                let value = if control == Control::Hue {
                    hue_degrees(value)
                } else {
                    value
                };
                outbox.update(state, control, value);
            }
        }

        if let Some(on) = ToggleButton::new("Color cycle", state.color_cycle)
            .enabled(enabled)
            .min_width(self.slider.track().length() as f32)
            .show(ui)
        {
            outbox.update(state, Control::ColorCycle, on);
        }

        separator(ui);

        let readout = if state.scale_enabled {
            format!("{:.2}", state.scale)
        } else {
            "off".to_owned()
        };
        value_label(ui, "Scale", &readout);
        let change = ScaleSlider::new(self.scale, state.scale, state.scale_enabled)
            .enabled(enabled)
            .show(ui);
        if let Some(on) = change.toggle {
            outbox.update(state, Control::ScaleEnabled, on);
        }
        if let Some(value) = change.value {
            outbox.update(state, Control::Scale, value);
        }

        separator(ui);

        section_label(ui, "Preview");
        ui.horizontal(|ui| {
            PreviewSwatch::new(&state.white_color()).show(ui);
            PreviewSwatch::new(&state.black_color()).show(ui);
            PreviewSwatch::new(&state.current_color())
                .alpha(state.fade)
                .show(ui);
        });

        outbox.messages
    }
}

#[derive(Default)]
struct Outbox {
    messages: Vec<ControlMessage>,
}

impl Outbox {
    fn update(&mut self, state: &mut ControlPanelState, control: Control, value: impl Into<ControlValue>) {
        match state.update(control, value) {
            Ok(message) => self.messages.push(message),
            Err(e) => log::warn!("dropping {control} change: {e}"),
        }
    }
}
