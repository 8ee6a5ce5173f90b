//! Live storm state simulator.
//!
//! Owns the storm store, advances storms on a fixed tick with an
//! injected update policy, tracks selection, and produces
//! TrackerSnapshots for the rendering layer.

pub mod engine;
pub mod scenario;
pub mod selection;
pub mod source;
pub mod store;
pub mod systems;

pub use storm_core as core;
pub use engine::{SimConfig, Simulation};
pub use store::StormStore;

#[cfg(test)]
mod tests;
