//! Macroboard - compose automation action sequences on an infinite canvas.
//!
//! Action templates (click, key press, delay, ...) are dragged from a
//! palette onto a zoomable, pannable design surface. The canvas core keeps
//! placed actions in unscaled canvas coordinates so rendering at any zoom is
//! a pure projection, and reports every committed placement to registered
//! sinks.

pub mod app;
pub mod board;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod input;
pub mod perf;
pub mod render;
pub mod sink;
pub mod spatial_index;
pub mod theme;
pub mod types;
