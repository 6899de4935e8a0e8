use std::sync::Arc;
use sb_core::SummaryEngine;

pub struct AppState {
    pub engine: Arc<SummaryEngine>,
}

impl AppState {
    pub fn new(engine: SummaryEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
