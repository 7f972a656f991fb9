//! The read-only context shared by every event handler.

use scd_core::Dataset;
use std::sync::Arc;

/// Immutable state injected into each handler.
///
/// Cheap to clone; all clones share one [`Dataset`].
#[derive(Debug, Clone)]
pub struct AppContext {
    dataset: Arc<Dataset>,
}

impl AppContext {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
