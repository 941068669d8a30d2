// ABOUTME: Pure preparation of the manual-activity payload the posting collaborator sends
// ABOUTME: Builds the wire fields and the Markdown-ish description; performs no network I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Activity Preparation
//!
//! The remote training-analytics service logs a strength session as a manual
//! activity. This module builds that payload - wire field names included - and
//! the human-readable description attached to it. Sending the payload is the
//! posting collaborator's job; everything here is a pure transform over a
//! parsed [`Workout`].

use crate::metrics::SessionMetrics;
use crate::models::{Set, Workout};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Activity type the analytics service uses for strength sessions.
pub const ACTIVITY_TYPE_WEIGHT_TRAINING: &str = "WeightTraining";

/// Manual-activity payload, serialized with the service's wire field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualActivity {
    /// Session start as zone-less local time, `YYYY-MM-DDTHH:MM:SS`.
    pub start_date_local: String,
    /// Always [`ACTIVITY_TYPE_WEIGHT_TRAINING`] for parsed exports.
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Session title.
    pub name: String,
    /// Rendered description, see [`format_description`].
    pub description: String,
    /// Estimated moving time in seconds.
    pub moving_time: u32,
    /// Estimated training load.
    #[serde(rename = "icu_training_load")]
    pub training_load: u32,
}

impl ManualActivity {
    /// Build the payload for one parsed workout, deriving metrics on the way.
    #[must_use]
    pub fn from_workout(workout: &Workout) -> Self {
        let metrics = SessionMetrics::for_workout(workout);
        Self {
            start_date_local: workout.performed_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            activity_type: ACTIVITY_TYPE_WEIGHT_TRAINING.to_owned(),
            name: workout.title.clone(),
            description: format_description(workout),
            moving_time: metrics.duration_minutes * 60,
            training_load: metrics.training_load,
        }
    }
}

/// Render a workout as the description attached to the posted activity:
/// one block per exercise with its sets, then a summary with exercise count,
/// set count, and total volume (volume is omitted when zero).
#[must_use]
pub fn format_description(workout: &Workout) -> String {
    let mut out = String::new();

    for exercise in &workout.exercises {
        let _ = write!(out, "\n**{}**", exercise.name);
        for (index, set) in exercise.sets.iter().enumerate() {
            let _ = write!(out, "\n  Set {}: {}", index + 1, format_set(set));
        }
        out.push('\n');
    }

    let _ = write!(out, "\n**Summary**");
    let _ = write!(out, "\nTotal exercises: {}", workout.exercises.len());
    let _ = write!(out, "\nTotal sets: {}", workout.total_sets());
    let volume = crate::metrics::total_volume(workout);
    if volume > 0.0 {
        let _ = write!(out, "\nTotal volume: {volume:.0} kg");
    }
    out
}

/// Render one set the way the export writes it.
fn format_set(set: &Set) -> String {
    match set {
        Set::Weighted { weight_kg, reps, warmup } => {
            let mut parts = Vec::new();
            // Zero weight renders reps-only, like the bodyweight notation.
            if *weight_kg > 0.0 {
                parts.push(format!("{} kg", format_weight(*weight_kg)));
            }
            parts.push(format!("{reps} reps"));
            let body = parts.join(" × ");
            if *warmup {
                format!("Warmup: {body}")
            } else {
                body
            }
        }
        Set::Bodyweight { reps } => format!("{reps} reps"),
        Set::Timed { duration_seconds } => {
            format!("{}:{:02}", duration_seconds / 60, duration_seconds % 60)
        }
    }
}

/// Whole kilograms print without a fraction; anything else keeps one decimal.
fn format_weight(weight_kg: f64) -> String {
    if weight_kg.fract() == 0.0 {
        format!("{weight_kg:.0}")
    } else {
        format!("{weight_kg}")
    }
}
