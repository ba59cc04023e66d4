//! Human-readable workout summaries.

use std::fmt;

use serde::Serialize;

use crate::record::WorkoutRecord;

/// Snapshot of a record's reportable values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl InfoMessage {
    /// Builds a message for `record`, labelled with `training_type`.
    pub fn new(training_type: impl Into<String>, record: &WorkoutRecord) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours: record.duration_hours(),
            distance_km: record.distance_km(),
            mean_speed_kmh: record.mean_speed_kmh(),
            calories_kcal: record.calories_kcal(),
        }
    }

    /// Renders the single-line summary.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    use crate::record::{Activity, Session};

    fn running() -> WorkoutRecord {
        WorkoutRecord::new(
            Session {
                action_count: 15_000,
                duration_hours: 1.0,
                weight_kg: 75.0,
            },
            Activity::Running,
        )
    }

    #[test]
    fn running_message() {
        assert_snapshot!(
            running().info().message(),
            @"Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
        );
    }

    #[test]
    fn swimming_message() {
        let record = WorkoutRecord::new(
            Session {
                action_count: 720,
                duration_hours: 1.0,
                weight_kg: 80.0,
            },
            Activity::Swimming {
                pool_length_m: 25.0,
                pool_lengths_count: 40,
            },
        );
        assert_snapshot!(
            record.info().message(),
            @"Workout type: Swimming; Duration: 1.000 h; Distance: 1.000 km; Avg speed: 0.040 km/h; Calories burned: 182.400."
        );
    }

    #[test]
    fn walking_message() {
        let record = WorkoutRecord::new(
            Session {
                action_count: 9000,
                duration_hours: 1.0,
                weight_kg: 75.0,
            },
            Activity::SportsWalking { height_cm: 180.0 },
        );
        assert_snapshot!(
            record.info().message(),
            @"Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252."
        );
    }

    #[test]
    fn explicit_display_name_is_used() {
        let message = InfoMessage::new("Jogging", &running()).message();
        assert!(message.starts_with("Workout type: Jogging; "));
    }

    #[test]
    fn formatting_is_idempotent() {
        let record = running();
        assert_eq!(record.info().message(), record.info().message());
        assert_eq!(record.info().to_string(), record.info().message());
    }

    #[test]
    fn zero_duration_renders_ieee_values() {
        let record = WorkoutRecord::new(
            Session {
                action_count: 15_000,
                duration_hours: 0.0,
                weight_kg: 75.0,
            },
            Activity::Running,
        );
        let message = record.info().message();
        assert!(message.contains("Avg speed: inf km/h"), "{message}");
    }
}
