//! Core types for the Macroboard canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! application: action templates, placement records, and the events emitted
//! to outbound sinks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of automatable input primitive a template describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Single mouse click at a configured position
    Click,
    /// Two clicks in rapid succession
    DoubleClick,
    /// A key press/release pair
    KeyPress,
    /// A pause between neighboring actions
    Delay,
}

impl ActionKind {
    pub fn type_label(&self) -> &'static str {
        match self {
            ActionKind::Click => "CLICK",
            ActionKind::DoubleClick => "2xCLICK",
            ActionKind::KeyPress => "KEY",
            ActionKind::Delay => "WAIT",
        }
    }
}

/// Per-action configuration presets.
///
/// Every action starts from these defaults when it is placed; the editors
/// that tune them live outside the canvas core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// How many times the action fires when executed
    pub occurrences: u32,
    /// Delay before the first occurrence, in milliseconds
    pub delay_ms: u64,
    /// Delay between occurrences, in milliseconds
    pub delay_per_occurrence_ms: u64,
    /// Target position for pointer actions; `None` means "wherever the
    /// pointer is at execution time"
    pub mouse_position: Option<(i32, i32)>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            occurrences: 1,
            delay_ms: 0,
            delay_per_occurrence_ms: 0,
            mouse_position: None,
        }
    }
}

/// A draggable entry in the action palette.
///
/// Templates are immutable and supplied by the catalog; the canvas core only
/// reads them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionTemplate {
    /// Stable identifier, unique within the catalog
    pub id: String,
    /// Human-readable palette label
    pub label: String,
    /// The input primitive this template produces
    pub kind: ActionKind,
    /// Size of a placed instance in canvas units at zoom 1.0 (width, height)
    pub default_size: (f32, f32),
    /// Configuration stamped onto each placed instance
    #[serde(default)]
    pub defaults: ActionConfig,
}

impl ActionTemplate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            default_size: (140.0, 48.0),
            defaults: ActionConfig::default(),
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.default_size = (width, height);
        self
    }

    pub fn with_defaults(mut self, defaults: ActionConfig) -> Self {
        self.defaults = defaults;
        self
    }
}

/// An action instance committed to the canvas.
///
/// `position` is always stored in unscaled canvas coordinates (normalized to
/// zoom 1.0) so re-rendering at any zoom is a pure projection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacedAction {
    /// Unique identifier for this instance
    pub instance_id: Uuid,
    /// The template this instance was created from
    pub template_id: String,
    /// Position on the canvas in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Size of the action card in canvas units (width, height)
    pub size: (f32, f32),
    /// Configuration for execution, starting from the template defaults
    pub config: ActionConfig,
}

/// The record emitted to registered sinks when a placement commits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementEvent {
    pub template_id: String,
    /// Canvas-space position of the new instance
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub config: ActionConfig,
}

impl PlacementEvent {
    pub fn from_action(action: &PlacedAction) -> Self {
        Self {
            template_id: action.template_id.clone(),
            position: action.position,
            size: action.size,
            config: action.config.clone(),
        }
    }
}

/// Direction of a stepwise zoom operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}
