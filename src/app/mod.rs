//! Application module - the main Macroboard application state and logic.
//!
//! - `state` - the Macroboard struct definition and sub-structs
//! - `lifecycle` - initialization
//! - `view` - the root Render impl and chrome

mod lifecycle;
mod state;
mod view;

pub use state::{CanvasState, Macroboard, PaletteState, SystemState};
