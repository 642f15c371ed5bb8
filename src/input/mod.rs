//! Mouse and scroll input handling for the canvas.
//!
//! All pointer interaction logic lives here: palette pickup, live drag
//! movement, drop resolution, placed-action repositioning, panning, and
//! zooming.
//!
//! ## Architecture
//!
//! A single drag controller dispatches on an explicit state machine
//! ([`DragState`]) instead of binding one handler per widget. Handlers run on
//! the interaction loop, are invoked for every native move/scroll event, and
//! recompute rather than accumulate, so they are safe at high frequency.
//!
//! ## Modules
//!
//! - `coords` - conversions between screen, surface-local, and canvas space
//! - `state` - the drag state machine
//! - `mouse_down` - pickup dispatch (palette card, placed action, panning)
//! - `drag` - mouse move handling (preview, reposition, pan)
//! - `mouse_up` - drop resolution (commit or cancel)
//! - `transform` - scroll handling (pan, stepwise zoom) and surface layout

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use state::DragState;
