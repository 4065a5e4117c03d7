//! Per-handle drag bookkeeping kept in egui's temp memory.

use egui::{Id, Pos2, Response, Ui, Vec2};
use kurbo::Point;
use lumenpad_core::DragState;

use crate::convert::to_local;

/// Current drag state of a handle.
pub(crate) fn drag_state(ui: &Ui, id: Id) -> DragState {
    ui.data(|d| d.get_temp::<DragState>(id)).unwrap_or_default()
}

/// Advance a handle's drag for this frame.
///
/// Returns the unclamped handle position on drag start and on frames where the
/// pointer actually moved. Held-still frames and the release report nothing.
pub(crate) fn drag_frame(
    ui: &Ui,
    response: &Response,
    id: Id,
    origin: Pos2,
    handle: Point,
) -> Option<Point> {
    if response.drag_stopped() {
        let mut state = drag_state(ui, id);
        state.end();
        ui.data_mut(|d| d.remove::<DragState>(id));
        return None;
    }
    if !(response.drag_started() || response.dragged()) {
        return None;
    }
    let pointer = to_local(origin, response.interact_pointer_pos()?);
    let mut state = drag_state(ui, id);
    let starting = response.drag_started() || !state.is_dragging();
    if starting {
        state = DragState::begin(pointer, handle);
        ui.data_mut(|d| d.insert_temp(id, state));
    } else if response.drag_delta() == Vec2::ZERO {
        return None;
    }
    state.raw_handle_position(pointer)
}
