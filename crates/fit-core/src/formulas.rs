//! Training formulas.
//!
//! One module per workout kind. Every function is pure and takes only the
//! fields that belong to its kind, so the formula set of one kind can never
//! leak into another.
//!
//! Inputs are not range-checked here: a zero duration yields an infinite
//! or NaN speed, exactly as IEEE-754 division does.

/// Meters in a kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Step length in meters, shared by running and sports walking.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by `action_count` steps.
#[allow(clippy::cast_precision_loss)]
fn step_distance_km(action_count: u64) -> f64 {
    action_count as f64 * STEP_LENGTH_M / METERS_PER_KM
}

pub mod running {
    use super::{METERS_PER_KM, MINUTES_PER_HOUR};

    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn distance_km(action_count: u64) -> f64 {
        super::step_distance_km(action_count)
    }

    pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
        distance_km / duration_hours
    }

    pub fn calories_kcal(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed_kmh + CALORIES_MEAN_SPEED_SHIFT) * weight_kg
            / METERS_PER_KM
            * (duration_hours * MINUTES_PER_HOUR)
    }
}

pub mod sports_walking {
    use super::MINUTES_PER_HOUR;

    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s.
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn distance_km(action_count: u64) -> f64 {
        super::step_distance_km(action_count)
    }

    pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
        distance_km / duration_hours
    }

    pub fn calories_kcal(
        mean_speed_kmh: f64,
        weight_kg: f64,
        height_cm: f64,
        duration_hours: f64,
    ) -> f64 {
        let speed_msec = mean_speed_kmh * KMH_IN_MSEC;
        (CALORIES_WEIGHT_MULTIPLIER * weight_kg
            + (speed_msec.powi(2) / (height_cm / CM_IN_M))
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * weight_kg)
            * (duration_hours * MINUTES_PER_HOUR)
    }
}

/// Swimming distance comes from pool geometry; the stroke count is not used.
pub mod swimming {
    use super::METERS_PER_KM;

    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn distance_km(pool_length_m: f64, pool_lengths_count: u32) -> f64 {
        pool_length_m * f64::from(pool_lengths_count) / METERS_PER_KM
    }

    /// Scales distance by the lap count once more before dividing by time.
    pub fn mean_speed_kmh(distance_km: f64, pool_lengths_count: u32, duration_hours: f64) -> f64 {
        distance_km * f64::from(pool_lengths_count) / METERS_PER_KM / duration_hours
    }

    pub fn calories_kcal(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
        (mean_speed_kmh + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * weight_kg
            * duration_hours
    }
}
