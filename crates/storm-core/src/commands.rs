//! Commands sent from the host or rendering layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectionMode;

/// All possible tracker actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackerCommand {
    /// Focus a storm; its forecast geometry is materialized from now on.
    Select { storm_id: u32 },
    /// Drop the current focus.
    ClearSelection,
    /// Resume ticking.
    Start,
    /// Halt further mutation. Already-applied state is kept.
    Stop,
    /// Switch which rendering surface projected points target.
    SetProjection { mode: ProjectionMode },
}
