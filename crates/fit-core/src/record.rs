//! Workout records: validated inputs plus the metrics derived from them.

use serde::Serialize;

use crate::formulas::{running, sports_walking, swimming};
use crate::kind::WorkoutKind;
use crate::report::InfoMessage;

/// Inputs shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Session {
    /// Steps for running and walking, strokes for swimming.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

/// Kind-specific inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Running,
    SportsWalking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64,
        pool_lengths_count: u32,
    },
}

impl Activity {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }
}

/// Derived training metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Metrics {
    /// Runs the formula set selected by `activity`.
    pub fn compute(session: &Session, activity: &Activity) -> Self {
        let Session {
            action_count,
            duration_hours,
            weight_kg,
        } = *session;

        match *activity {
            Activity::Running => {
                let distance_km = running::distance_km(action_count);
                let mean_speed_kmh = running::mean_speed_kmh(distance_km, duration_hours);
                Self {
                    distance_km,
                    mean_speed_kmh,
                    calories_kcal: running::calories_kcal(mean_speed_kmh, weight_kg, duration_hours),
                }
            }
            Activity::SportsWalking { height_cm } => {
                let distance_km = sports_walking::distance_km(action_count);
                let mean_speed_kmh = sports_walking::mean_speed_kmh(distance_km, duration_hours);
                Self {
                    distance_km,
                    mean_speed_kmh,
                    calories_kcal: sports_walking::calories_kcal(
                        mean_speed_kmh,
                        weight_kg,
                        height_cm,
                        duration_hours,
                    ),
                }
            }
            Activity::Swimming {
                pool_length_m,
                pool_lengths_count,
            } => {
                let distance_km = swimming::distance_km(pool_length_m, pool_lengths_count);
                let mean_speed_kmh =
                    swimming::mean_speed_kmh(distance_km, pool_lengths_count, duration_hours);
                Self {
                    distance_km,
                    mean_speed_kmh,
                    calories_kcal: swimming::calories_kcal(
                        mean_speed_kmh,
                        weight_kg,
                        duration_hours,
                    ),
                }
            }
        }
    }
}

/// One validated workout.
///
/// Metrics are computed once in [`WorkoutRecord::new`] and the fields are
/// private, so a record cannot drift from its inputs after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    session: Session,
    activity: Activity,
    metrics: Metrics,
}

impl WorkoutRecord {
    pub fn new(session: Session, activity: Activity) -> Self {
        let metrics = Metrics::compute(&session, &activity);
        Self {
            session,
            activity,
            metrics,
        }
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub const fn action_count(&self) -> u64 {
        self.session.action_count
    }

    pub const fn duration_hours(&self) -> f64 {
        self.session.duration_hours
    }

    pub const fn weight_kg(&self) -> f64 {
        self.session.weight_kg
    }

    pub const fn distance_km(&self) -> f64 {
        self.metrics.distance_km
    }

    pub const fn mean_speed_kmh(&self) -> f64 {
        self.metrics.mean_speed_kmh
    }

    pub const fn calories_kcal(&self) -> f64 {
        self.metrics.calories_kcal
    }

    /// Summary message labelled with the kind's display name.
    pub fn info(&self) -> InfoMessage {
        InfoMessage::new(self.kind().display_name(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(action_count: u64, duration_hours: f64, weight_kg: f64) -> Session {
        Session {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    #[test]
    fn running_record_populates_metrics() {
        let record = WorkoutRecord::new(session(15_000, 1.0, 75.0), Activity::Running);

        assert_eq!(record.kind(), WorkoutKind::Running);
        assert!((record.distance_km() - 9.75).abs() < 1e-9);
        assert!((record.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((record.calories_kcal() - 797.805).abs() < 1e-9);
    }

    #[test]
    fn swimming_ignores_stroke_count() {
        let pool = Activity::Swimming {
            pool_length_m: 25.0,
            pool_lengths_count: 40,
        };
        let few = WorkoutRecord::new(session(10, 1.0, 80.0), pool);
        let many = WorkoutRecord::new(session(720, 1.0, 80.0), pool);

        assert_eq!(few.metrics(), many.metrics());
        assert_eq!(many.action_count(), 720);
        assert!((many.distance_km() - 1.0).abs() < 1e-9);
        assert!((many.mean_speed_kmh() - 0.04).abs() < 1e-9);
        assert!((many.calories_kcal() - 182.4).abs() < 1e-9);
    }

    #[test]
    fn walking_height_changes_calories_only() {
        let short = WorkoutRecord::new(
            session(9000, 1.0, 75.0),
            Activity::SportsWalking { height_cm: 150.0 },
        );
        let tall = WorkoutRecord::new(
            session(9000, 1.0, 75.0),
            Activity::SportsWalking { height_cm: 180.0 },
        );

        assert_eq!(short.distance_km().to_bits(), tall.distance_km().to_bits());
        assert_eq!(
            short.mean_speed_kmh().to_bits(),
            tall.mean_speed_kmh().to_bits()
        );
        assert!(short.calories_kcal() > tall.calories_kcal());
    }

    #[test]
    fn negative_weight_is_not_rejected() {
        let record = WorkoutRecord::new(session(15_000, 1.0, -75.0), Activity::Running);
        assert!(record.weight_kg() < 0.0);
        assert!(record.calories_kcal() < 0.0);
    }

    #[test]
    fn record_keeps_inputs_as_given() {
        let inputs = session(9000, 1.5, 75.0);
        let record = WorkoutRecord::new(inputs, Activity::SportsWalking { height_cm: 180.0 });

        assert_eq!(*record.session(), inputs);
        assert_eq!(record.weight_kg().to_bits(), 75.0_f64.to_bits());
        assert_eq!(record.duration_hours().to_bits(), 1.5_f64.to_bits());
        assert_eq!(*record.metrics(), Metrics::compute(&inputs, record.activity()));
    }

    #[test]
    fn record_serializes_inputs_and_metrics() {
        let record = WorkoutRecord::new(
            session(9000, 1.0, 75.0),
            Activity::SportsWalking { height_cm: 180.0 },
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["activity"]["kind"], "sports_walking");
        assert_eq!(json["activity"]["height_cm"], 180.0);
        assert_eq!(json["session"]["action_count"], 9000);
        assert!(json["metrics"]["calories_kcal"].as_f64().unwrap() > 0.0);
    }
}
