//! The color wheel widget: hue ring, two ring selectors and preview half-disks.

use egui::{Color32, CursorIcon, Sense, Stroke, Ui, vec2};
use lumenpad_core::selector::{RingSelector, SELECTOR_BORDER_WIDTH};
use lumenpad_core::wheel::{ARC_STROKE_WIDTH, ColorWheelModel, PreviewArc, WheelChannel, WheelGeometry};

use crate::colors::{css_to_color32, paint_hue_ring, rgb_to_color32};
use crate::convert::{polar, to_local, to_screen};
use crate::interact::drag_frame;
use crate::theme;

/// Segments used to draw each preview half-disk.
const ARC_SEGMENTS: usize = 48;

/// Values requested on the wheel this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelChange {
    pub white: Option<f64>,
    pub black: Option<f64>,
}

impl WheelChange {
    pub fn is_empty(&self) -> bool {
        self.white.is_none() && self.black.is_none()
    }
}

/// A controlled color wheel with a "white" and a "black" hue handle.
pub struct ColorWheel<'a> {
    geometry: WheelGeometry,
    white: f64,
    black: f64,
    white_color: &'a str,
    black_color: &'a str,
    disabled: bool,
}

impl<'a> ColorWheel<'a> {
    /// Create a wheel showing the two current hues.
    pub fn new(geometry: WheelGeometry, white: f64, black: f64) -> Self {
        Self {
            geometry,
            white,
            black,
            white_color: "#ffffff",
            black_color: "#000000",
            disabled: false,
        }
    }

    /// CSS colors of the two preview arcs.
    pub fn arc_colors(mut self, white_color: &'a str, black_color: &'a str) -> Self {
        self.white_color = white_color;
        self.black_color = black_color;
        self
    }

    /// Make both handles inert.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show the wheel and return the hues requested this frame.
    ///
    /// A press picks the top-most handle under the pointer; that handle
    /// follows the drag until release.
    pub fn show(self, ui: &mut Ui) -> WheelChange {
        let size = self.geometry.size() as f32;
        let model = ColorWheelModel::new(self.geometry).disabled(self.disabled);
        let sense = if model.is_disabled() {
            Sense::hover()
        } else {
            Sense::drag()
        };
        let (rect, response) = ui.allocate_exact_size(vec2(size, size), sense);
        let origin = rect.min;
        let active_id = response.id.with("active");
        let mut change = WheelChange::default();

        if response.drag_started() {
            let grabbed = response
                .interact_pointer_pos()
                .and_then(|pos| model.hit_test(to_local(origin, pos), self.white, self.black));
            ui.data_mut(|d| d.insert_temp(active_id, grabbed));
        }
        let active = ui
            .data(|d| d.get_temp::<Option<WheelChannel>>(active_id))
            .flatten();
        if let Some(channel) = active {
            let handle = model.handle_position(self.value(channel));
            let raw = drag_frame(ui, &response, active_id.with(channel), origin, handle);
            if let Some(drag) = raw.and_then(|raw| model.drag(raw)) {
                match channel {
                    WheelChannel::White => change.white = Some(drag.degrees),
                    WheelChannel::Black => change.black = Some(drag.degrees),
                }
            }
        }
        if response.drag_stopped() {
            ui.data_mut(|d| d.remove::<Option<WheelChannel>>(active_id));
        }

        if ui.is_rect_visible(rect) {
            let centre = to_screen(origin, self.geometry.centre());
            paint_hue_ring(
                ui,
                centre,
                self.geometry.main_radius() as f32,
                self.geometry.inner_radius() as f32,
                &self.geometry.hue_slices(),
                theme::BACKGROUND,
            );
            let [white_arc, black_arc] = self.geometry.preview_arcs();
            self.paint_arc(ui, origin, &white_arc, css_to_color32(self.white_color));
            self.paint_arc(ui, origin, &black_arc, css_to_color32(self.black_color));

            // Draw order: the black handle sits on top.
            for channel in WheelChannel::DRAW_ORDER {
                let value = self.value(channel);
                let centre = to_screen(origin, model.handle_position(value));
                let radius = self.geometry.handle_radius() as f32;
                let painter = ui.painter();
                painter.circle_filled(
                    centre + vec2(0.0, 1.0),
                    radius + 2.0,
                    Color32::from_black_alpha(60),
                );
                painter.circle_filled(centre, radius, rgb_to_color32(RingSelector::fill_color(value)));
                painter.circle_stroke(
                    centre,
                    radius,
                    Stroke::new(
                        SELECTOR_BORDER_WIDTH as f32,
                        rgb_to_color32(channel.border_color()),
                    ),
                );
            }
        }

        let over_handle = response
            .hover_pos()
            .and_then(|pos| model.hit_test(to_local(origin, pos), self.white, self.black))
            .is_some();
        if over_handle || active.is_some() {
            response.on_hover_cursor(CursorIcon::Grab);
        }

        change
    }

    fn value(&self, channel: WheelChannel) -> f64 {
        match channel {
            WheelChannel::White => self.white,
            WheelChannel::Black => self.black,
        }
    }

    fn paint_arc(&self, ui: &Ui, origin: egui::Pos2, arc: &PreviewArc, fill: Color32) {
        let centre = to_screen(origin, arc.centre);
        let radius = arc.radius as f32;
        let mut points = Vec::with_capacity(ARC_SEGMENTS + 2);
        points.push(centre);
        for i in 0..=ARC_SEGMENTS {
            let degrees = arc.start_degrees + 180.0 * i as f64 / ARC_SEGMENTS as f64;
            points.push(polar(centre, radius, degrees));
        }
        ui.painter().add(egui::Shape::convex_polygon(
            points,
            fill,
            Stroke::new(ARC_STROKE_WIDTH as f32, rgb_to_color32(arc.stroke)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Harness;
    use egui::Pos2;

    fn wheel(h: &mut Harness, white: f64, black: f64, disabled: bool) -> (Pos2, WheelChange) {
        h.frame(|ui| {
            let origin = ui.cursor().min;
            let geometry = WheelGeometry::new(300.0, 30.0).unwrap();
            let change = ColorWheel::new(geometry, white, black)
                .arc_colors("rgb(255, 0, 0)", "hsl(200 100% 50%)")
                .disabled(disabled)
                .show(ui);
            (origin, change)
        })
    }

    fn near(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|a| (a - expected).abs() < 1e-3)
    }

    #[test]
    fn test_no_input_no_change() {
        let mut h = Harness::new();
        assert!(wheel(&mut h, 10.0, 200.0, false).1.is_empty());
        assert!(wheel(&mut h, 10.0, 200.0, true).1.is_empty());
    }

    #[test]
    fn test_drag_white_handle_around_ring() {
        let mut h = Harness::new();
        let (origin, _) = wheel(&mut h, 0.0, 180.0, false);

        // White at 0° sits at (centre + 120, centre) with centre 142.5.
        h.press(origin + vec2(262.5, 142.5));
        let change = wheel(&mut h, 0.0, 180.0, false).1;
        assert!(near(change.white, 0.0) || near(change.white, 360.0));
        assert_eq!(change.black, None);

        // Straight below the centre is 90°.
        h.move_to(origin + vec2(142.5, 262.5));
        let change = wheel(&mut h, 0.0, 180.0, false).1;
        assert!(near(change.white, 90.0), "{change:?}");
        assert_eq!(change.black, None);

        h.release(origin + vec2(142.5, 262.5));
        assert!(wheel(&mut h, 90.0, 180.0, false).1.is_empty());
    }

    #[test]
    fn test_overlapping_handles_grab_black() {
        let mut h = Harness::new();
        let (origin, _) = wheel(&mut h, 0.0, 0.0, false);
        h.press(origin + vec2(262.5, 142.5));
        wheel(&mut h, 0.0, 0.0, false);
        h.move_to(origin + vec2(142.5, 262.5));
        let change = wheel(&mut h, 0.0, 0.0, false).1;
        assert_eq!(change.white, None);
        assert!(near(change.black, 90.0), "{change:?}");
    }

    #[test]
    fn test_press_off_handle_moves_nothing() {
        let mut h = Harness::new();
        let (origin, _) = wheel(&mut h, 0.0, 180.0, false);
        h.press(origin + vec2(142.5, 27.5));
        wheel(&mut h, 0.0, 180.0, false);
        h.move_to(origin + vec2(200.0, 60.0));
        assert!(wheel(&mut h, 0.0, 180.0, false).1.is_empty());
    }

    #[test]
    fn test_disabled_wheel_is_inert() {
        let mut h = Harness::new();
        let (origin, _) = wheel(&mut h, 0.0, 180.0, true);
        h.press(origin + vec2(262.5, 142.5));
        assert!(wheel(&mut h, 0.0, 180.0, true).1.is_empty());
        h.move_to(origin + vec2(142.5, 262.5));
        assert!(wheel(&mut h, 0.0, 180.0, true).1.is_empty());
        h.release(origin + vec2(142.5, 262.5));
        assert!(wheel(&mut h, 0.0, 180.0, true).1.is_empty());
    }
}
