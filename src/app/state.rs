//! Application state - the Macroboard struct definition and sub-structs.

use crate::board::Board;
use crate::catalog::CatalogHandle;
use crate::config::Config;
use crate::input::DragState;
use crate::perf::PerfMonitor;
use crate::theme::Theme;

/// Canvas interaction state - the board and the drag state machine.
pub struct CanvasState {
    /// The design surface
    pub board: Board,
    /// Drag state machine - replaces per-widget event bindings
    pub drag_state: DragState,
}

/// Palette state - the shared template catalog.
pub struct PaletteState {
    pub catalog: CatalogHandle,
}

/// Configuration, theme, and performance tracking.
pub struct SystemState {
    pub config: Config,
    pub theme: Theme,
    pub perf: PerfMonitor,
}

/// Main application state - composed of focused sub-structs.
pub struct Macroboard {
    /// Canvas interaction state
    pub canvas: CanvasState,
    /// Palette state
    pub palette: PaletteState,
    /// Configuration and system state
    pub system: SystemState,
}
