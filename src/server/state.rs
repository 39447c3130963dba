use std::sync::Arc;

use crate::engine::ReliabilityEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ReliabilityEngine>,
}

impl AppState {
    pub fn new(engine: ReliabilityEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
