//! Drag state machine - unified state management for pointer interactions.
//!
//! A single explicit state machine replaces per-widget event bindings: the
//! handlers dispatch on the current state, so "which template" stays decoupled
//! from "how dragging works".
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingTemplate   (mouse down on a palette card)
//! Idle -> DraggingPlaced     (mouse down on a placed action)
//! Idle -> Panning            (middle mouse down on the surface)
//!
//! Any  -> Idle               (mouse up - commits, finalizes, or cancels)
//! ```
//!
//! At most one session is active at any instant; a pointer-down while a drag
//! is in flight is ignored.

use gpui::{Pixels, Point};
use uuid::Uuid;

/// Transient interaction state. Exists only between pointer-down and
/// pointer-up; never persisted.
#[derive(Debug, Clone)]
pub enum DragState {
    /// No active input operation
    Idle,

    /// Dragging a template out of the palette. The floating preview tracks
    /// `live_position` in screen space and is not zoom-scaled.
    DraggingTemplate {
        /// Template being dragged
        template_id: String,
        /// Center-anchor offset, measured once from the source palette card
        pointer_offset: Point<Pixels>,
        /// Current preview top-left in screen space
        live_position: Point<Pixels>,
    },

    /// Repositioning an action already committed to the canvas
    DraggingPlaced {
        /// Instance under the cursor
        instance_id: Uuid,
        /// Offset from the action's screen-space top-left to the cursor
        drag_offset: Point<Pixels>,
    },

    /// Canvas panning (middle mouse drag)
    Panning {
        /// Last mouse position for delta calculation
        last_pos: Point<Pixels>,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any drag operation is active
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging_template(&self) -> bool {
        matches!(self, Self::DraggingTemplate { .. })
    }

    pub fn is_dragging_placed(&self) -> bool {
        matches!(self, Self::DraggingPlaced { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Get the template id being dragged, if any
    pub fn dragging_template(&self) -> Option<&str> {
        match self {
            Self::DraggingTemplate { template_id, .. } => Some(template_id),
            _ => None,
        }
    }

    /// Get the placed instance being dragged, if any
    pub fn dragging_placed(&self) -> Option<Uuid> {
        match self {
            Self::DraggingPlaced { instance_id, .. } => Some(*instance_id),
            _ => None,
        }
    }

    pub fn pointer_offset(&self) -> Option<Point<Pixels>> {
        match self {
            Self::DraggingTemplate { pointer_offset, .. } => Some(*pointer_offset),
            _ => None,
        }
    }

    pub fn drag_offset(&self) -> Option<Point<Pixels>> {
        match self {
            Self::DraggingPlaced { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    /// Current preview position of a template drag
    pub fn live_position(&self) -> Option<Point<Pixels>> {
        match self {
            Self::DraggingTemplate { live_position, .. } => Some(*live_position),
            _ => None,
        }
    }

    /// Get last mouse position (for panning)
    pub fn last_mouse_pos(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    /// Start a template drag. Ignored (returns false) unless idle.
    pub fn start_template_drag(
        &mut self,
        template_id: impl Into<String>,
        pointer_offset: Point<Pixels>,
        live_position: Point<Pixels>,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::DraggingTemplate {
            template_id: template_id.into(),
            pointer_offset,
            live_position,
        };
        true
    }

    /// Start repositioning a placed action. Ignored unless idle.
    pub fn start_placed_drag(&mut self, instance_id: Uuid, drag_offset: Point<Pixels>) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::DraggingPlaced {
            instance_id,
            drag_offset,
        };
        true
    }

    /// Start panning. Ignored unless idle.
    pub fn start_panning(&mut self, last_pos: Point<Pixels>) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Panning { last_pos };
        true
    }

    /// Update the preview position of an in-flight template drag
    pub fn update_live_position(&mut self, pos: Point<Pixels>) {
        if let Self::DraggingTemplate { live_position, .. } = self {
            *live_position = pos;
        }
    }

    /// Update last mouse position (for panning)
    pub fn update_last_mouse_pos(&mut self, pos: Point<Pixels>) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }

    /// Discard the session and return to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
