//! Systems that operate on the storm store each tick.
//!
//! Systems are free functions over the store. They do not own state;
//! all storm state lives in the store's components.

pub mod random_walk;
pub mod snapshot;
