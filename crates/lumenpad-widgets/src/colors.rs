//! Color conversion, the hue ring painter and preview swatches.

use egui::{Color32, CornerRadius, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2};
use lumenpad_core::color::{Rgb, parse_css_color};
use lumenpad_core::wheel::HueSlice;

use crate::convert::polar;
use crate::{sizing, theme};

/// Core color to egui color.
pub fn rgb_to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Parse a CSS color string, falling back to grey.
pub fn css_to_color32(color: &str) -> Color32 {
    match parse_css_color(color) {
        Ok(rgb) => rgb_to_color32(rgb),
        Err(e) => {
            log::warn!("{e}");
            theme::FALLBACK
        }
    }
}

/// White at the given opacity.
pub(crate) fn white(opacity: f32) -> Color32 {
    Color32::WHITE.gamma_multiply(opacity)
}

/// Paint the hue annulus: one wedge per slice, then the centre punched out.
pub fn paint_hue_ring(
    ui: &Ui,
    centre: Pos2,
    outer_radius: f32,
    inner_radius: f32,
    slices: &[HueSlice],
    background: Color32,
) {
    let painter = ui.painter();
    for slice in slices {
        let mid = (slice.start_degrees + slice.end_degrees) / 2.0;
        painter.add(egui::Shape::convex_polygon(
            vec![
                centre,
                polar(centre, outer_radius, slice.start_degrees),
                polar(centre, outer_radius, mid),
                polar(centre, outer_radius, slice.end_degrees),
            ],
            rgb_to_color32(slice.color),
            Stroke::NONE,
        ));
    }
    painter.circle_filled(centre, inner_radius, background);
}

/// A non-interactive swatch showing a color, optionally faded.
pub struct PreviewSwatch<'a> {
    color: &'a str,
    alpha: f32,
    size: Vec2,
}

impl<'a> PreviewSwatch<'a> {
    /// Create a swatch for a CSS color.
    pub fn new(color: &'a str) -> Self {
        Self {
            color,
            alpha: 1.0,
            size: vec2(sizing::SWATCH, sizing::SWATCH),
        }
    }

    /// Opacity in [0, 1].
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0) as f32;
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return its rect.
    pub fn show(self, ui: &mut Ui) -> Rect {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::hover());

        if ui.is_rect_visible(rect) {
            let fill = css_to_color32(self.color).gamma_multiply(self.alpha);
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), fill);
            ui.painter().rect_stroke(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                Stroke::new(2.0, Color32::from_gray(80)),
                StrokeKind::Inside,
            );
        }

        response.on_hover_text(self.color);
        rect
    }
}
