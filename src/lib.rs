// ABOUTME: Library entry point for the Strong-export workout parser and metric estimator
// ABOUTME: Wires the classifier, grammar parser, set decoder, metrics, and activity payload modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # strong-metrics
//!
//! Parses free-form workout text exported by the Strong fitness app into a
//! structured [`Workout`] and derives the approximate metrics (training load,
//! duration) used to log the session as a manual activity in a training
//! analytics service.
//!
//! The crate is the pure core of a larger pipeline: the chat transport that
//! receives the text and the HTTP client that posts the finished activity are
//! external collaborators. Everything here is a synchronous, in-memory
//! transform - no I/O, no shared mutable state, safe to call concurrently.
//!
//! ## Example
//!
//! ```
//! use strong_metrics::{ManualActivity, SessionMetrics, WorkoutParser};
//!
//! let text = "\
//! Treino da noite
//! quarta-feira, 8 de outubro de 2025 às 21:16
//!
//! Back Extension
//! Série 1: +0 kg × 20 reps
//! Série 2: +10 kg × 20 reps
//!
//! Pull Up
//! Série 1: 9 reps
//! ";
//!
//! let parser = WorkoutParser::new();
//! let parsed = parser.parse(text)?;
//! assert_eq!(parsed.workout.exercises.len(), 2);
//!
//! let metrics = SessionMetrics::for_workout(&parsed.workout);
//! assert_eq!(metrics.training_load, 10);
//!
//! let activity = ManualActivity::from_workout(&parsed.workout);
//! assert_eq!(activity.activity_type, "WeightTraining");
//! # Ok::<(), strong_metrics::ParseError>(())
//! ```

/// Manual-activity payload preparation and description formatting.
pub mod activity;

/// Stateless per-line lexical classification.
pub mod classifier;

/// Parse error and warning taxonomy.
pub mod errors;

/// Language profiles and the profile registry.
pub mod language;

/// Derived session metrics.
pub mod metrics;

/// Workout, exercise, and set data model.
pub mod models;

/// The line grammar parser.
pub mod parser;

/// Set-line payload decoding and numeric locale normalization.
pub mod set_decoder;

pub use activity::{format_description, ManualActivity};
pub use errors::{ParseError, ParseResult, ParseWarning, WarningKind};
pub use language::{DatePattern, LanguageProfile, LanguageRegistry};
pub use metrics::{
    estimated_duration_minutes, total_volume, training_load, SessionMetrics, MIN_TRAINING_LOAD,
    ZERO_VOLUME_LOAD,
};
pub use models::{Exercise, Set, Workout};
pub use parser::{ParsedWorkout, WorkoutParser};
