//! Drag gesture tracking for widget handles.

use kurbo::{Point, Vec2};

/// Glow layer opacity while a handle is being dragged.
pub const GLOW_OPACITY_ACTIVE: f32 = 0.2;
/// Glow layer opacity at rest.
pub const GLOW_OPACITY_IDLE: f32 = 0.05;

/// Transient drag state of a single handle.
///
/// Only visual feedback depends on this; reported values never do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus handle position at drag start.
        grab_offset: Vec2,
    },
}

impl DragState {
    /// Start a drag. The grab offset keeps the handle from jumping under the pointer.
    pub fn begin(pointer: Point, handle_position: Point) -> Self {
        log::trace!("drag start at {pointer:?}");
        Self::Dragging {
            grab_offset: pointer - handle_position,
        }
    }

    /// Release the handle.
    pub fn end(&mut self) {
        if self.is_dragging() {
            log::trace!("drag end");
        }
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Unclamped handle position for a move frame, or `None` when idle.
    pub fn raw_handle_position(&self, pointer: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { grab_offset } => Some(pointer - *grab_offset),
        }
    }

    /// Opacity of the outer glow ring.
    pub fn glow_opacity(&self) -> f32 {
        if self.is_dragging() {
            GLOW_OPACITY_ACTIVE
        } else {
            GLOW_OPACITY_IDLE
        }
    }
}
