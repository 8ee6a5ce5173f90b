//! State shared between the host and the simulation loop thread.

use std::sync::{Arc, Mutex};

use storm_core::commands::TrackerCommand;
use storm_core::state::TrackerSnapshot;

/// Commands sent from the host to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A tracker command to forward to the simulation.
    Tracker(TrackerCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Latest fully-applied snapshot. Written by the loop thread once per
/// tick, after every storm has been updated.
pub type SharedSnapshot = Arc<Mutex<Option<TrackerSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
