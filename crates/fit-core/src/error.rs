//! Errors raised while turning a raw sensor package into a workout record.

use thiserror::Error;

use crate::kind::WorkoutKind;

/// Validation failures at the dispatch boundary.
///
/// Each variant is fatal to the single package that produced it and never
/// affects other packages in the same batch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// The package code is not one of the known workout codes.
    #[error("unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// The package carries the wrong number of values for its kind.
    #[error("{kind} expects {expected} values, got {actual}")]
    InvalidPayloadArity {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A count field is not a non-negative whole number.
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}
