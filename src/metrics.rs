// ABOUTME: Derived session metrics: total volume, training load, and duration estimate
// ABOUTME: Pure functions over a completed Workout; recomputed on demand, never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Session Metrics
//!
//! Three derived metrics over a parsed [`Workout`], all pure and side-effect
//! free. Training load and duration are explicit, documented approximations -
//! coarse proxies good enough to log a manual activity, not physiologically
//! calibrated scores.

use crate::models::{Exercise, Workout};
use serde::{Deserialize, Serialize};

/// Training load reported when a session has zero lifted volume (pure
/// bodyweight or timed work).
pub const ZERO_VOLUME_LOAD: u32 = 50;

/// Floor for volume-derived training load.
pub const MIN_TRAINING_LOAD: u32 = 10;

/// One load point per this much lifted volume, in kg·reps.
const VOLUME_PER_LOAD_POINT: f64 = 1000.0;

/// Estimated minutes spent per set.
const MINUTES_PER_SET: u32 = 2;

/// Estimated transition minutes per exercise.
const MINUTES_PER_EXERCISE: u32 = 1;

/// The three derived metrics bundled for callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Total lifted volume in kg·reps.
    pub total_volume_kg: f64,
    /// Approximate training load, ≥ 10 (or the zero-volume default of 50).
    pub training_load: u32,
    /// Approximate session duration in minutes, ≥ 3 for any parsed workout.
    pub duration_minutes: u32,
}

impl SessionMetrics {
    /// Compute all three metrics for one workout.
    #[must_use]
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            total_volume_kg: total_volume(workout),
            training_load: training_load(workout),
            duration_minutes: estimated_duration_minutes(workout),
        }
    }
}

/// Sum of weight × reps across all weighted sets, in kg·reps.
///
/// Bodyweight and timed sets contribute zero.
#[must_use]
pub fn total_volume(workout: &Workout) -> f64 {
    workout.exercises.iter().map(Exercise::volume_kg).sum()
}

/// Approximate training load derived from lifted volume.
///
/// Zero volume maps to the fixed default [`ZERO_VOLUME_LOAD`]; otherwise one
/// point per 1000 kg·reps, floored, never below [`MIN_TRAINING_LOAD`].
#[must_use]
pub fn training_load(workout: &Workout) -> u32 {
    let volume = total_volume(workout);
    if volume == 0.0 {
        return ZERO_VOLUME_LOAD;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = (volume / VOLUME_PER_LOAD_POINT).floor() as u32;
    points.max(MIN_TRAINING_LOAD)
}

/// Approximate session duration: two minutes per set plus one transition
/// minute per exercise.
///
/// Every parsed exercise has at least one set, so any parsed workout yields
/// at least three minutes.
#[must_use]
pub fn estimated_duration_minutes(workout: &Workout) -> u32 {
    let total_sets = u32::try_from(workout.total_sets()).unwrap_or(u32::MAX);
    let exercise_count = u32::try_from(workout.exercises.len()).unwrap_or(u32::MAX);
    MINUTES_PER_SET.saturating_mul(total_sets)
        .saturating_add(MINUTES_PER_EXERCISE.saturating_mul(exercise_count))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::models::Set;
    use chrono::NaiveDate;

    fn workout(exercises: Vec<Exercise>) -> Workout {
        Workout {
            title: "Session".to_owned(),
            performed_at: NaiveDate::from_ymd_opt(2025, 10, 8)
                .and_then(|d| d.and_hms_opt(21, 16, 0))
                .unwrap_or_default(),
            exercises,
        }
    }

    fn weighted(weight_kg: f64, reps: u32) -> Set {
        Set::Weighted { weight_kg, reps, warmup: false }
    }

    #[test]
    fn volume_sums_weighted_sets_only() {
        let w = workout(vec![
            Exercise { name: "Squat".into(), sets: vec![weighted(100.0, 5), weighted(60.0, 10)] },
            Exercise { name: "Plank".into(), sets: vec![Set::Timed { duration_seconds: 60 }] },
            Exercise { name: "Pull Up".into(), sets: vec![Set::Bodyweight { reps: 9 }] },
        ]);
        assert_eq!(total_volume(&w), 1100.0);
    }

    #[test]
    fn load_is_floored_at_ten() {
        let w = workout(vec![Exercise {
            name: "Curl".into(),
            sets: vec![weighted(10.0, 20)],
        }]);
        // 200 kg·reps → 0 points before the floor.
        assert_eq!(training_load(&w), MIN_TRAINING_LOAD);
    }

    #[test]
    fn load_uses_default_for_zero_volume() {
        let w = workout(vec![Exercise {
            name: "Pull Up".into(),
            sets: vec![Set::Bodyweight { reps: 9 }],
        }]);
        assert_eq!(training_load(&w), ZERO_VOLUME_LOAD);
    }

    #[test]
    fn load_scales_with_volume() {
        let w = workout(vec![Exercise {
            name: "Deadlift".into(),
            sets: vec![weighted(150.0, 100)],
        }]);
        // 15000 kg·reps → 15 points.
        assert_eq!(training_load(&w), 15);
    }

    #[test]
    fn duration_formula_is_exact() {
        let w = workout(vec![
            Exercise { name: "A".into(), sets: vec![weighted(50.0, 5), weighted(50.0, 5)] },
            Exercise { name: "B".into(), sets: vec![Set::Bodyweight { reps: 8 }] },
        ]);
        assert_eq!(estimated_duration_minutes(&w), 2 * 3 + 2);
    }
}
