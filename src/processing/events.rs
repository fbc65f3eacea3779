use log::{debug, info};
use serde::Serialize;

use crate::models::{Field, Side};

/// Where a resolved field value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Source {
    pub side: Side,
    pub rule: Field,
}

/// Emitted once per output field when the assembler resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionEvent {
    pub field: Field,
    pub source: Option<Source>,
}

impl ExtractionEvent {
    pub fn found(&self) -> bool {
        self.source.is_some()
    }
}

/// Hook for diagnostics from the otherwise side-effect-free assembler.
pub trait ExtractionObserver: Send + Sync {
    fn on_field(&self, event: &ExtractionEvent);
}

pub struct NoopObserver;

impl ExtractionObserver for NoopObserver {
    fn on_field(&self, _event: &ExtractionEvent) {}
}

/// Forwards events to the `log` facade.
pub struct LogObserver;

impl ExtractionObserver for LogObserver {
    fn on_field(&self, event: &ExtractionEvent) {
        match event.source {
            Some(source) => debug!(
                "field {} resolved from {} side ({} rule)",
                event.field, source.side, source.rule
            ),
            None => info!("field {} not found", event.field),
        }
    }
}
