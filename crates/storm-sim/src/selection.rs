//! Selection state: at most one focused storm.
//!
//! Owned by the simulation; the rendering layer only sees the id.
//! Forecast geometry is materialized for the selected storm only.

use tracing::debug;

use storm_core::error::StormError;

use crate::store::StormStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<u32>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. An unknown id fails and leaves the prior
    /// selection in place.
    pub fn select(&mut self, store: &StormStore, id: u32) -> Result<(), StormError> {
        if !store.contains(id) {
            return Err(StormError::NotFound { id });
        }
        debug!(previous = ?self.selected, storm_id = id, "storm selected");
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear(&mut self) {
        if let Some(id) = self.selected.take() {
            debug!(storm_id = id, "selection cleared");
        }
    }

    pub fn current(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }
}
