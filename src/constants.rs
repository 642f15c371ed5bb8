//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Height of the footer/status bar in pixels
pub const FOOTER_HEIGHT: f32 = 28.0;

/// Width of the action palette (left sidebar) in pixels
pub const PALETTE_WIDTH: f32 = 200.0;

/// Minimum width of the design surface in pixels
pub const SURFACE_MIN_WIDTH: f32 = 600.0;

/// Minimum window height in pixels
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Default window size at startup (width, height)
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1040.0, 680.0);

// ============================================================================
// Palette Layout
// ============================================================================

/// Height of the palette section label
pub const PALETTE_HEADER_HEIGHT: f32 = 36.0;

/// Width of a palette action card
pub const PALETTE_ITEM_WIDTH: f32 = 168.0;

/// Height of a palette action card
pub const PALETTE_ITEM_HEIGHT: f32 = 40.0;

/// Vertical gap between palette cards
pub const PALETTE_ITEM_GAP: f32 = 8.0;

/// Inset of the card column from the palette edge
pub const PALETTE_ITEM_INSET: f32 = 16.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Maximum zoom steps in either direction from the baseline
pub const ZOOM_LIMIT: i32 = 8;

/// Visual scale change per zoom step (~6% per scroll notch)
pub const ZOOM_SPEED: f32 = 0.06;

/// Pan distance per scroll line (when the platform reports line deltas)
pub const SCROLL_LINE_PAN: f32 = 20.0;

// ============================================================================
// Canvas Rendering
// ============================================================================

/// Spacing of the background reference grid at zoom 1.0
pub const GRID_SPACING: f32 = 48.0;

/// Margin in pixels around the viewport for culling (prevents pop-in at edges)
pub const CULLING_MARGIN: f32 = 50.0;

/// Base font size for action labels at zoom 1.0
pub const ACTION_LABEL_SIZE: f32 = 13.0;
