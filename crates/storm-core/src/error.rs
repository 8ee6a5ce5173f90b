//! Error taxonomy for the tracker core.

use std::fmt;

/// Errors raised by the storm store, selection, and seed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum StormError {
    /// Two seed entities share an id. Fatal at startup.
    DuplicateId { id: u32 },
    /// Lookup or selection of an unknown id.
    NotFound { id: u32 },
    /// An update tried to store a value outside its invariant range.
    /// Indicates a caller bug; the update policy always pre-clamps.
    ClampViolation {
        id: u32,
        field: &'static str,
        value: f64,
    },
    /// Seed data rejected at initialization.
    InvalidSeed { id: u32, reason: String },
}

impl StormError {
    pub fn invalid_seed(id: u32, reason: impl Into<String>) -> Self {
        StormError::InvalidSeed {
            id,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StormError::DuplicateId { id } => write!(f, "duplicate storm id {id}"),
            StormError::NotFound { id } => write!(f, "storm {id} not found"),
            StormError::ClampViolation { id, field, value } => {
                write!(f, "storm {id}: {field} = {value} is outside its allowed range")
            }
            StormError::InvalidSeed { id, reason } => {
                write!(f, "invalid seed for storm {id}: {reason}")
            }
        }
    }
}

impl std::error::Error for StormError {}
