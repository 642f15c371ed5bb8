//! Outbound placement sinks.
//!
//! On every committed placement the board hands a [`PlacementEvent`] to each
//! registered sink. The canvas is the source of visual truth: a failing sink
//! is logged and swallowed, it never rolls back the in-memory placement.

use crate::types::PlacementEvent;

/// Receiver for committed placements (persistence, execution export, ...).
pub trait PlacementSink: Send {
    fn on_placement(&self, event: &PlacementEvent) -> anyhow::Result<()>;
}

/// The board's set of registered sinks.
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<Box<dyn PlacementSink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Box<dyn PlacementSink>) {
        self.sinks.push(sink);
    }

    /// Deliver an event to every sink, logging and swallowing failures.
    pub fn emit(&self, event: &PlacementEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.on_placement(event) {
                tracing::error!(template = %event.template_id, "placement sink failed: {e:#}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl std::fmt::Debug for SinkRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkRegistry")
            .field("len", &self.sinks.len())
            .finish()
    }
}

/// Default sink: emits each placement as a JSON line at info level.
pub struct LoggingSink;

impl PlacementSink for LoggingSink {
    fn on_placement(&self, event: &PlacementEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(placement = %payload, "action placed");
        Ok(())
    }
}
