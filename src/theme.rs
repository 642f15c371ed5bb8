//! Color palette for the editor chrome and canvas.

use crate::types::ActionKind;
use gpui::{Hsla, hsla};

/// Theme colors used across the palette, canvas, and chrome.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: Hsla,
    pub surface_background: Hsla,
    pub chrome_background: Hsla,
    pub border: Hsla,
    pub grid_line: Hsla,
    pub foreground: Hsla,
    pub muted_foreground: Hsla,
    pub primary: Hsla,
    pub primary_foreground: Hsla,
    pub card_background: Hsla,
    pub card_border: Hsla,
    pub ghost_border: Hsla,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: hsla(0.0, 0.0, 0.11, 1.0),
            surface_background: hsla(0.0, 0.0, 0.13, 1.0),
            chrome_background: hsla(0.0, 0.0, 0.09, 1.0),
            border: hsla(0.0, 0.0, 0.25, 1.0),
            grid_line: hsla(0.0, 0.0, 0.2, 0.6),
            foreground: hsla(0.0, 0.0, 0.92, 1.0),
            muted_foreground: hsla(0.0, 0.0, 0.6, 1.0),
            primary: hsla(210.0 / 360.0, 0.6, 0.5, 1.0),
            primary_foreground: hsla(0.0, 0.0, 0.98, 1.0),
            card_background: hsla(0.0, 0.0, 0.18, 1.0),
            card_border: hsla(0.0, 0.0, 0.3, 1.0),
            ghost_border: hsla(210.0 / 360.0, 0.6, 0.6, 0.9),
        }
    }

    /// Accent color for a given action kind, distinct per primitive.
    pub fn for_kind(&self, kind: ActionKind) -> Hsla {
        let (saturation, lightness, alpha) = (0.5, 0.42, 0.9);
        match kind {
            ActionKind::Click => hsla(210.0 / 360.0, saturation, lightness, alpha),
            ActionKind::DoubleClick => hsla(250.0 / 360.0, saturation, lightness, alpha),
            ActionKind::KeyPress => hsla(150.0 / 360.0, saturation, lightness, alpha),
            ActionKind::Delay => hsla(35.0 / 360.0, saturation, lightness, alpha),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
