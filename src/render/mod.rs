//! Rendering - the palette dock, the design surface, and the drag preview.

pub mod canvas;
pub mod palette;
