// ABOUTME: Core data model for parsed workouts: Workout, Exercise, and Set variants
// ABOUTME: Represents one Strong app export as an ordered, exclusively-owned tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Data Model
//!
//! A parsed export is a single tree: one [`Workout`] owning an ordered list of
//! [`Exercise`] values, each owning an ordered list of [`Set`] values. Order is
//! significant throughout - it reflects the order the session was performed in.
//!
//! All models derive `Serialize`/`Deserialize` so results can travel to the
//! posting collaborator as JSON.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One parsed training session.
///
/// Invariant: a successfully parsed workout has at least one exercise, and
/// every exercise has at least one set (exercises that end up empty are
/// dropped during parsing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Free-text session title (first line of the export).
    pub title: String,
    /// Wall-clock start time as written in the export. The export carries no
    /// timezone, so this is naive local time.
    pub performed_at: NaiveDateTime,
    /// Exercises in session order.
    pub exercises: Vec<Exercise>,
}

/// One named movement within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Raw exercise header text, trimmed.
    pub name: String,
    /// Sets in performed order.
    pub sets: Vec<Set>,
}

/// One performed unit of an exercise.
///
/// Exactly one variant applies per set; the variant is determined solely by
/// the decoded line content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Set {
    /// A set performed with an external load. Zero weight is valid - the
    /// export writes `+0 kg` for bodyweight variations logged under the
    /// weighted syntax.
    Weighted {
        /// Load in kilograms, non-negative.
        weight_kg: f64,
        /// Repetitions, positive.
        reps: u32,
        /// Whether the set was marked as a warm-up.
        warmup: bool,
    },
    /// A set counted in repetitions only.
    Bodyweight {
        /// Repetitions, positive.
        reps: u32,
    },
    /// A set measured by duration, e.g. a plank or a stretch.
    Timed {
        /// Duration in seconds, positive.
        duration_seconds: u32,
    },
}

impl Set {
    /// Lifted volume contributed by this set, in kg·reps.
    ///
    /// Bodyweight and timed sets contribute zero.
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        match self {
            Self::Weighted { weight_kg, reps, .. } => weight_kg * f64::from(*reps),
            Self::Bodyweight { .. } | Self::Timed { .. } => 0.0,
        }
    }
}

impl Exercise {
    /// Create an exercise with no sets yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
        }
    }

    /// Lifted volume across all sets of this exercise, in kg·reps.
    #[must_use]
    pub fn volume_kg(&self) -> f64 {
        self.sets.iter().map(Set::volume_kg).sum()
    }
}

impl Workout {
    /// Total number of sets across all exercises.
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}
