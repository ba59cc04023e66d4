//! Sensor package dispatch.
//!
//! Maps a `(code, values)` package to a [`WorkoutRecord`]:
//!
//! 1. Look up the code in the kind table (`RUN`, `WLK`, `SWM`)
//! 2. Check the value count against the kind's arity
//! 3. Bind values positionally and build the record
//!
//! Only the shape of the package is validated. Zero or negative durations
//! and weights pass through untouched.

use serde::Deserialize;

use crate::error::DispatchError;
use crate::kind::WorkoutKind;
use crate::record::{Activity, Session, WorkoutRecord};

/// A raw package as received from a sensor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    pub fn dispatch(&self) -> Result<WorkoutRecord, DispatchError> {
        read_package(&self.code, &self.values)
    }
}

/// Builds a workout record from a sensor code and its values.
pub fn read_package(code: &str, values: &[f64]) -> Result<WorkoutRecord, DispatchError> {
    let kind: WorkoutKind = code.parse()?;

    let expected = kind.arity();
    if values.len() != expected {
        return Err(DispatchError::InvalidPayloadArity {
            kind,
            expected,
            actual: values.len(),
        });
    }

    let session = Session {
        action_count: whole_number(values[0], "action_count")?,
        duration_hours: values[1],
        weight_kg: values[2],
    };

    let activity = match kind {
        WorkoutKind::Running => Activity::Running,
        WorkoutKind::SportsWalking => Activity::SportsWalking {
            height_cm: values[3],
        },
        WorkoutKind::Swimming => Activity::Swimming {
            pool_length_m: values[3],
            pool_lengths_count: whole_number(values[4], "pool_lengths_count")?,
        },
    };

    tracing::debug!(%kind, ?values, "dispatched package");
    Ok(WorkoutRecord::new(session, activity))
}

/// Converts a sensor value into an integer count.
///
/// Counts arrive as floats alongside the other values, so whole numbers such
/// as `720.0` are accepted while fractions, negatives and non-finite values
/// are not.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn whole_number<T>(value: f64, field: &'static str) -> Result<T, DispatchError>
where
    T: TryFrom<u64>,
{
    let invalid = || DispatchError::InvalidCount { field, value };

    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(invalid());
    }
    T::try_from(value as u64).map_err(|_| invalid())
}
