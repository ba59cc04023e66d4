//! Core workout logic for the fitness tracker.
//!
//! This crate contains:
//! - Formulas: distance, mean speed and calories per workout kind
//! - Records: immutable workouts with metrics computed at construction
//! - Dispatch: turning a raw sensor package into a record
//! - Reports: the one-line workout summary

mod dispatch;
mod error;
pub mod formulas;
mod kind;
mod record;
mod report;

pub use dispatch::{Package, read_package};
pub use error::DispatchError;
pub use kind::WorkoutKind;
pub use record::{Activity, Metrics, Session, WorkoutRecord};
pub use report::InfoMessage;
