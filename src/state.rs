// src/state.rs
use std::sync::Arc;

use crate::services::generator::TextGenerator;

pub type SharedState = Arc<AppState>;

// Read-only after startup. Anything mutable added here needs its own lock.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}
