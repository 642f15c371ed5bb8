//! The design surface: view state and the placed-action collection.
//!
//! A [`Board`] owns the pan offset, the stepwise zoom state, every
//! [`PlacedAction`], the spatial index used for pointer hit testing, and the
//! sinks that are notified of committed placements.
//!
//! The zoom *counter* is the authoritative zoom state: the float scale is
//! always recomputed as `(1 + zoom_speed)^zoom_step`, never accumulated
//! across incremental scaling, so repeated zooming cannot drift.

use crate::config::Config;
use crate::input::coords::{self, CoordinateContext, CoordinateConverter};
use crate::sink::{PlacementSink, SinkRegistry};
use crate::spatial_index::SpatialIndex;
use crate::types::{ActionTemplate, PlacedAction, PlacementEvent, ZoomDirection};
use gpui::{Bounds, Pixels, Point, point, px};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// One design surface: view state plus the actions placed on it.
pub struct Board {
    /// Surface-local pan offset in pixels. Unbounded: the logical surface is
    /// infinite.
    pub pan_offset: Point<Pixels>,
    /// Authoritative zoom counter, bounded to `[-zoom_limit, +zoom_limit]`
    zoom_step: i32,
    /// Cached scale, always `(1 + zoom_speed)^zoom_step`
    zoom: f32,
    zoom_limit: i32,
    zoom_speed: f32,
    /// Placed actions in insertion order; insertion order is z-order
    pub actions: Vec<PlacedAction>,
    spatial: SpatialIndex,
    sinks: SinkRegistry,
}

/// Serializable snapshot of a board. The zoom float is deliberately absent:
/// it is reconstructed from the step counter on restore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardState {
    pub pan_offset: (f32, f32),
    pub zoom_step: i32,
    pub actions: Vec<PlacedAction>,
}

impl Board {
    pub fn new(config: &Config) -> Self {
        Self {
            pan_offset: point(px(0.0), px(0.0)),
            zoom_step: 0,
            zoom: 1.0,
            zoom_limit: config.zoom_limit,
            zoom_speed: config.zoom_speed,
            actions: Vec::new(),
            spatial: SpatialIndex::new(),
            sinks: SinkRegistry::new(),
        }
    }

    pub fn new_for_test() -> Self {
        Self::new(&Config::default())
    }

    // ==================== View State ====================

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_step(&self) -> i32 {
        self.zoom_step
    }

    pub fn zoom_limit(&self) -> i32 {
        self.zoom_limit
    }

    fn zoom_level_for(&self, step: i32) -> f32 {
        (1.0 + self.zoom_speed).powi(step)
    }

    /// Shift the view by a screen-space delta. No limits.
    pub fn pan(&mut self, delta: Point<Pixels>) {
        self.pan_offset = self.pan_offset + delta;
    }

    /// Step the zoom in or out, anchored at `anchor` (screen space) so the
    /// canvas point under the anchor stays visually stationary.
    ///
    /// Returns false without changing anything when the step counter is
    /// already at the bound; that is a clamp, not an error.
    pub fn zoom_at(
        &mut self,
        direction: ZoomDirection,
        anchor: Point<Pixels>,
        surface_origin: Point<Pixels>,
    ) -> bool {
        let new_step = match direction {
            ZoomDirection::In if self.zoom_step < self.zoom_limit => self.zoom_step + 1,
            ZoomDirection::Out if self.zoom_step > -self.zoom_limit => self.zoom_step - 1,
            _ => return false,
        };
        let new_zoom = self.zoom_level_for(new_step);

        // Recompute the pan offset so screen_to_canvas(anchor) is invariant
        // across the scale change.
        let ctx = CoordinateContext::new(surface_origin, self.pan_offset, self.zoom);
        let canvas = CoordinateConverter::screen_to_canvas(anchor, &ctx);
        let local = CoordinateConverter::screen_to_local(anchor, surface_origin);
        self.pan_offset = point(
            px(f32::from(local.x) - f32::from(canvas.x) * new_zoom),
            px(f32::from(local.y) - f32::from(canvas.y) * new_zoom),
        );

        self.zoom_step = new_step;
        self.zoom = new_zoom;
        true
    }

    // ==================== Hit Testing ====================

    /// True iff `screen` lies within the surface rectangle. All four edges
    /// are inclusive: a drop exactly on the border is accepted.
    pub fn hit_test(&self, screen: Point<Pixels>, surface: Bounds<Pixels>) -> bool {
        let x = f32::from(screen.x);
        let y = f32::from(screen.y);
        let left = f32::from(surface.origin.x);
        let top = f32::from(surface.origin.y);
        let right = left + f32::from(surface.size.width);
        let bottom = top + f32::from(surface.size.height);
        x >= left && x <= right && y >= top && y <= bottom
    }

    /// The topmost placed action containing the given canvas-space point.
    ///
    /// Candidates come from the spatial index (O(log n)); the z-order
    /// tie-break walks the action list from the front.
    pub fn action_at_point(&self, canvas_x: f32, canvas_y: f32) -> Option<Uuid> {
        let candidates: HashSet<Uuid> =
            self.spatial.query_point(canvas_x, canvas_y).into_iter().collect();

        self.actions
            .iter()
            .rev()
            .find(|action| candidates.contains(&action.instance_id))
            .map(|action| action.instance_id)
    }

    // ==================== Placement ====================

    /// Commit a new placement at a screen position that has already passed
    /// the drop hit-test.
    ///
    /// Calling this with a non-finite or out-of-surface point is a contract
    /// violation by the drag controller: fatal in test builds, a logged
    /// no-op in release builds.
    pub fn commit_placement(
        &mut self,
        template: &ActionTemplate,
        screen: Point<Pixels>,
        surface: Bounds<Pixels>,
    ) -> Option<PlacedAction> {
        let valid = coords::is_finite(screen) && self.hit_test(screen, surface);
        if !valid {
            debug_assert!(false, "placement commit outside the surface: {screen:?}");
            tracing::warn!(?screen, "ignoring placement commit outside the surface");
            return None;
        }

        let ctx = CoordinateContext::new(surface.origin, self.pan_offset, self.zoom);
        let canvas_pos = CoordinateConverter::screen_to_canvas(screen, &ctx);

        let action = PlacedAction {
            instance_id: Uuid::new_v4(),
            template_id: template.id.clone(),
            position: (f32::from(canvas_pos.x), f32::from(canvas_pos.y)),
            size: template.default_size,
            config: template.defaults.clone(),
        };

        self.spatial.insert(action.instance_id, action.position, action.size);
        self.actions.push(action.clone());
        self.sinks.emit(&PlacementEvent::from_action(&action));

        Some(action)
    }

    pub fn get_action(&self, instance_id: Uuid) -> Option<&PlacedAction> {
        self.actions.iter().find(|a| a.instance_id == instance_id)
    }

    pub fn get_action_mut(&mut self, instance_id: Uuid) -> Option<&mut PlacedAction> {
        self.actions.iter_mut().find(|a| a.instance_id == instance_id)
    }

    /// Move a placed action to a new canvas position. The spatial index is
    /// synced separately via [`Board::update_spatial_index`] once the drag
    /// settles.
    pub fn move_action(&mut self, instance_id: Uuid, position: (f32, f32)) -> bool {
        match self.get_action_mut(instance_id) {
            Some(action) => {
                action.position = position;
                true
            }
            None => false,
        }
    }

    /// Re-sync one action's spatial index entry with its current rectangle.
    pub fn update_spatial_index(&mut self, instance_id: Uuid) {
        if let Some(action) = self.get_action(instance_id) {
            let (position, size) = (action.position, action.size);
            self.spatial.update(instance_id, position, size);
        }
    }

    // ==================== Sinks ====================

    pub fn register_sink(&mut self, sink: Box<dyn PlacementSink>) {
        self.sinks.register(sink);
    }

    // ==================== Snapshot ====================

    pub fn to_state(&self) -> BoardState {
        BoardState {
            pan_offset: (f32::from(self.pan_offset.x), f32::from(self.pan_offset.y)),
            zoom_step: self.zoom_step,
            actions: self.actions.clone(),
        }
    }

    /// Rebuild a board from a snapshot. The zoom scale is recomputed from
    /// the step counter, and the counter itself is clamped into the
    /// configured bounds.
    pub fn from_state(state: BoardState, config: &Config) -> Self {
        let mut board = Self::new(config);
        board.pan_offset = point(px(state.pan_offset.0), px(state.pan_offset.1));
        board.zoom_step = state.zoom_step.clamp(-config.zoom_limit, config.zoom_limit);
        board.zoom = board.zoom_level_for(board.zoom_step);
        for action in &state.actions {
            board.spatial.insert(action.instance_id, action.position, action.size);
        }
        board.actions = state.actions;
        board
    }
}
