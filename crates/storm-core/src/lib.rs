//! Core types and definitions for the storm tracker.
//!
//! This crate defines the vocabulary shared across all other crates:
//! storm entities, components, commands, state snapshots, errors, and constants.
//! It has no dependency on any runtime, rendering surface, or random source.

pub mod commands;
pub mod components;
pub mod constants;
pub mod entity;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use entity::StormEntity;
pub use error::StormError;
