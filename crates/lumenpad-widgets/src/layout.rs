//! Layout helpers: separators and section labels.

use egui::{Color32, Pos2, Stroke, Ui};

use crate::theme;

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 6.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, Color32::from_gray(55)),
    );
    ui.add_space(12.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}

/// A label followed by a right-aligned numeric readout.
pub fn value_label(ui: &mut Ui, text: &str, readout: &str) {
    ui.horizontal(|ui| {
        section_label(ui, text);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(readout).size(10.0).color(theme::TEXT));
        });
    });
}
