//! Linear and scale sliders with glowing handles.

use egui::{CursorIcon, Id, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, vec2};
use kurbo::Point;
use lumenpad_core::scale::{ScaleSlider as ScaleModel, ToggleState};
use lumenpad_core::slider::{Axis, BAR_THICKNESS, INNER_R, LinearSlider, OUTER_R, THUMB_DOT_RADIUS, Track};

use crate::colors::white;
use crate::convert::to_screen;
use crate::interact::{drag_frame, drag_state};
use crate::theme;

const TRACK_OPACITY: f32 = 0.2;
const FILL_OPACITY: f32 = 0.8;
const DOT_OPACITY: f32 = 0.9;
const DISABLED_OPACITY: f32 = 0.4;
const THRESHOLD_HALF_HEIGHT: f32 = 10.0;

fn widget_size(axis: Axis, length: f64) -> Vec2 {
    let (length, thickness) = (length as f32, Track::thickness() as f32);
    match axis {
        Axis::Horizontal => vec2(length, thickness),
        Axis::Vertical => vec2(thickness, length),
    }
}

/// Screen position of a point on the bar's centre line.
fn bar_point(origin: Pos2, axis: Axis, along: f64) -> Pos2 {
    let middle = Track::middle();
    match axis {
        Axis::Horizontal => to_screen(origin, Point::new(along, middle)),
        Axis::Vertical => to_screen(origin, Point::new(middle, along)),
    }
}

fn handle_rect(origin: Pos2, anchor: Point) -> Rect {
    Rect::from_min_size(to_screen(origin, anchor), Vec2::splat((OUTER_R * 2.0) as f32))
}

fn handle_response(ui: &Ui, id: Id, rect: Rect, enabled: bool) -> Response {
    let sense = if enabled { Sense::drag() } else { Sense::hover() };
    let response = ui.interact(rect, id, sense);
    if enabled {
        response.on_hover_cursor(CursorIcon::Grab)
    } else {
        response
    }
}

/// Glow rings plus the centre dot.
fn paint_handle(ui: &Ui, centre: Pos2, glow: f32, dot_opacity: f32) {
    let painter = ui.painter();
    painter.circle_filled(centre, OUTER_R as f32, white(glow));
    painter.circle_filled(centre, INNER_R as f32, white(glow * 2.0));
    painter.circle_filled(centre, THUMB_DOT_RADIUS as f32, white(dot_opacity));
}

/// A controlled slider over a stored value in [0, 1].
///
/// The axis and value mapping come from the [`LinearSlider`] model, so the
/// same widget draws brightness (vertical), hue and saturation (horizontal)
/// and the perceptual fade slider.
pub struct Slider {
    model: LinearSlider,
    value: f64,
    enabled: bool,
    id_salt: Option<Id>,
}

impl Slider {
    pub fn new(model: LinearSlider, value: f64) -> Self {
        Self {
            model,
            value,
            enabled: true,
            id_salt: None,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Distinguish sliders that share a parent.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    /// Show the slider. Returns the stored value requested on this frame.
    pub fn show(self, ui: &mut Ui) -> Option<f64> {
        let axis = self.model.axis();
        let track = *self.model.track();
        let (rect, response) =
            ui.allocate_exact_size(widget_size(axis, track.length()), Sense::hover());
        let origin = rect.min;
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => response.id.with("handle"),
        };

        let anchor = self.model.handle_position(self.value);
        let handle = handle_response(ui, id, handle_rect(origin, anchor), self.enabled);
        let requested = drag_frame(ui, &handle, id, origin, anchor).map(|raw| {
            let drag = self.model.drag(raw);
            log::trace!("slider drag -> {:.3}", drag.value);
            drag.value
        });

        if ui.is_rect_visible(rect) {
            let centre = self.model.handle_centre(self.value);
            let (bar_start, bar_end) = (track.start(), track.start() + track.usable_length());
            // The fill grows from the left, or from the bottom when vertical.
            let fill_from = match axis {
                Axis::Horizontal => bar_start,
                Axis::Vertical => bar_end,
            };
            let fill_to = match axis {
                Axis::Horizontal => centre.x,
                Axis::Vertical => centre.y,
            };
            let dim = if self.enabled { 1.0 } else { DISABLED_OPACITY };
            let painter = ui.painter();
            painter.line_segment(
                [bar_point(origin, axis, bar_start), bar_point(origin, axis, bar_end)],
                Stroke::new(BAR_THICKNESS as f32, white(TRACK_OPACITY * dim)),
            );
            painter.line_segment(
                [bar_point(origin, axis, fill_from), bar_point(origin, axis, fill_to)],
                Stroke::new(BAR_THICKNESS as f32, white(FILL_OPACITY * dim)),
            );
            let glow = drag_state(ui, id).glow_opacity();
            paint_handle(ui, to_screen(origin, centre), glow * dim, DOT_OPACITY * dim);
        }

        requested
    }
}

/// What the user asked for on a scale slider this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleChange {
    /// New toggle state, only set on a crossing.
    pub toggle: Option<bool>,
    /// New value, only set inside the active zone.
    pub value: Option<f64>,
}

impl ScaleChange {
    pub fn is_empty(&self) -> bool {
        self.toggle.is_none() && self.value.is_none()
    }
}

/// A horizontal slider whose leftmost zone switches the control off.
pub struct ScaleSlider {
    model: ScaleModel,
    value: f64,
    toggle: ToggleState,
    enabled: bool,
}

impl ScaleSlider {
    pub fn new(model: ScaleModel, value: f64, enabled_toggle: bool) -> Self {
        Self {
            model,
            value,
            toggle: ToggleState::from_enabled(enabled_toggle),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show(self, ui: &mut Ui) -> ScaleChange {
        let track = *self.model.track();
        let (rect, response) =
            ui.allocate_exact_size(widget_size(Axis::Horizontal, track.length()), Sense::hover());
        let origin = rect.min;
        let id = response.id.with("handle");

        let anchor = self.model.handle_position(self.value, self.toggle);
        let handle = handle_response(ui, id, handle_rect(origin, anchor), self.enabled);
        let mut change = ScaleChange::default();
        if let Some(raw) = drag_frame(ui, &handle, id, origin, anchor) {
            let drag = self.model.drag(raw, self.toggle);
            if drag.toggled {
                change.toggle = Some(drag.toggle.is_on());
            }
            change.value = drag.value;
        }

        if ui.is_rect_visible(rect) {
            let on = self.toggle.is_on();
            let dim = if self.enabled { 1.0 } else { DISABLED_OPACITY };
            let axis = Axis::Horizontal;
            let threshold = self.model.active_start() + OUTER_R;
            let bar_end = track.start() + track.usable_length();
            let centre = Point::new(anchor.x + OUTER_R, anchor.y + OUTER_R);
            let painter = ui.painter();

            painter.line_segment(
                [bar_point(origin, axis, track.start()), bar_point(origin, axis, bar_end)],
                Stroke::new(BAR_THICKNESS as f32, white(TRACK_OPACITY * dim)),
            );
            let mark = bar_point(origin, axis, threshold);
            painter.line_segment(
                [
                    mark - vec2(0.0, THRESHOLD_HALF_HEIGHT),
                    mark + vec2(0.0, THRESHOLD_HALF_HEIGHT),
                ],
                Stroke::new(BAR_THICKNESS as f32, theme::TRACK_STROKE.gamma_multiply(dim)),
            );
            if on {
                painter.line_segment(
                    [mark, bar_point(origin, axis, centre.x.max(threshold))],
                    Stroke::new(BAR_THICKNESS as f32, theme::ACCENT.gamma_multiply(dim)),
                );
            }
            let glow = drag_state(ui, id).glow_opacity();
            let dot = if on { DOT_OPACITY } else { DISABLED_OPACITY };
            paint_handle(ui, to_screen(origin, centre), glow * dim, dot * dim);
        }

        change
    }
}
