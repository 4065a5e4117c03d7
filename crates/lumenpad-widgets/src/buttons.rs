//! On/off toggle button for flag controls such as color cycling.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// A pill-shaped toggle with a text label and an indicator dot.
/// Filled with the accent color while on.
pub struct ToggleButton<'a> {
    label: &'a str,
    on: bool,
    enabled: bool,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str, on: bool) -> Self {
        Self {
            label,
            on,
            enabled: true,
            min_width: None,
            height: 28.0,
            font_size: 12.0,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button. Returns the requested state when clicked.
    pub fn show(self, ui: &mut Ui) -> Option<bool> {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER, // sizing only
        );
        let content_width = galley.size().x + self.height + 8.0;
        let width = self.min_width.unwrap_or(content_width).max(content_width);
        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), sense);

        if ui.is_rect_visible(rect) {
            let dim = if self.enabled { 1.0 } else { 0.4 };
            let bg = if self.on {
                theme::ACCENT
            } else if response.hovered() && self.enabled {
                Color32::from_gray(55)
            } else {
                Color32::from_gray(40)
            };
            let radius = CornerRadius::same(sizing::PANEL_RADIUS);
            let painter = ui.painter();
            painter.rect_filled(rect, radius, bg.gamma_multiply(dim));
            painter.rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, Color32::from_gray(70).gamma_multiply(dim)),
                StrokeKind::Inside,
            );

            let dot = rect.left_center() + vec2(self.height / 2.0, 0.0);
            let dot_color = if self.on { Color32::WHITE } else { theme::TEXT_MUTED };
            painter.circle_filled(dot, self.height / 6.0, dot_color.gamma_multiply(dim));
            painter.text(
                dot + vec2(self.height / 2.0, 0.0),
                Align2::LEFT_CENTER,
                self.label,
                font_id,
                theme::TEXT.gamma_multiply(dim),
            );
        }

        let clicked = response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked.then_some(!self.on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_click_no_request() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert_eq!(ToggleButton::new("Color cycle", false).show(ui), None);
                assert_eq!(ToggleButton::new("Color cycle", true).enabled(false).show(ui), None);
            });
        });
    }
}
