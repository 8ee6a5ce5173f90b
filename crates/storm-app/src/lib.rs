//! Headless storm tracker host.
//!
//! Loads configuration, builds the simulation, and drives it on a
//! wall-clock loop thread, publishing snapshots for the rendering layer.

pub mod config;
pub mod sim_loop;
pub mod state;

pub use storm_core as core;
