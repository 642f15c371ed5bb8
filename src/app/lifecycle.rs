//! Application lifecycle - initialization.

use super::Macroboard;
use crate::app::state::{CanvasState, PaletteState, SystemState};
use crate::board::Board;
use crate::catalog::CatalogHandle;
use crate::config::Config;
use crate::input::DragState;
use crate::perf::PerfMonitor;
use crate::sink::LoggingSink;
use crate::theme::Theme;
use gpui::Context;

impl Macroboard {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        let config = Config::load();
        tracing::debug!(?config, "starting with config");

        let mut board = Board::new(&config);
        board.register_sink(Box::new(LoggingSink));

        Self {
            canvas: CanvasState {
                board,
                drag_state: DragState::default(),
            },
            palette: PaletteState {
                catalog: CatalogHandle::with_builtins(),
            },
            system: SystemState {
                config,
                theme: Theme::dark(),
                perf: PerfMonitor::new(),
            },
        }
    }
}
