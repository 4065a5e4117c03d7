//! Headless pointer driver for widget tests.

use egui::{Event, Frame, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, vec2};

/// Runs frames of a bare central panel and feeds it queued pointer events.
pub(crate) struct Harness {
    ctx: egui::Context,
    events: Vec<Event>,
    shapes: Vec<egui::epaint::ClippedShape>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            events: Vec::new(),
            shapes: Vec::new(),
        }
    }

    fn button(&mut self, pos: Pos2, pressed: bool) {
        self.events.push(Event::PointerMoved(pos));
        self.events.push(Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        });
    }

    /// Queue a primary-button press at `pos` for the next frame.
    pub(crate) fn press(&mut self, pos: Pos2) {
        self.button(pos, true);
    }

    pub(crate) fn move_to(&mut self, pos: Pos2) {
        self.events.push(Event::PointerMoved(pos));
    }

    pub(crate) fn release(&mut self, pos: Pos2) {
        self.button(pos, false);
    }

    /// Run one frame with whatever input is queued.
    pub(crate) fn frame<R>(&mut self, mut add: impl FnMut(&mut Ui) -> R) -> R {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 1024.0))),
            events: std::mem::take(&mut self.events),
            ..Default::default()
        };
        let mut out = None;
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(Frame::NONE)
                .show(ctx, |ui| out = Some(add(ui)));
        });
        self.shapes = output.shapes;
        out.expect("central panel runs every frame")
    }

    /// Centres of the filled circles of `radius` painted on the last frame.
    pub(crate) fn circles(&self, radius: f32) -> Vec<Pos2> {
        self.shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::Shape::Circle(circle) if (circle.radius - radius).abs() < 1e-3 => {
                    Some(circle.center)
                }
                _ => None,
            })
            .collect()
    }
}
