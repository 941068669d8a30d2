// ABOUTME: Line grammar parser: a small state machine turning classified lines into a Workout
// ABOUTME: Header errors are fatal; per-line set problems are skipped and recorded as warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Parser
//!
//! Consumes one export's text line by line through the grammar
//! `ExpectTitle → ExpectDate → ReadingBody → Done`:
//!
//! - the first non-blank line is the title, free text;
//! - the second non-blank line must match a registered date pattern, or the
//!   whole parse fails with [`ParseError::MalformedInput`] - the header is
//!   all-or-nothing;
//! - every further non-blank line is either a set line (decoded and appended
//!   to the open exercise) or an exercise header (closes the open exercise,
//!   opens a new one). Exercises that close with zero sets are dropped. A set
//!   line before any header, or one whose payload cannot be decoded, is
//!   skipped with a recorded [`ParseWarning`] so one malformed section does
//!   not destroy an otherwise valid workout.
//!
//! Parsing is a pure function of the input text and the registered profiles:
//! no randomness, no external state, byte-identical output on repeated runs.
//! A [`WorkoutParser`] is `Send + Sync` and freely shared across callers.

use crate::classifier::{LineClass, LineClassifier};
use crate::errors::{ParseError, ParseResult, ParseWarning, WarningKind};
use crate::language::LanguageRegistry;
use crate::models::{Exercise, Workout};
use crate::set_decoder;
use tracing::{debug, warn};

/// A successfully parsed workout plus the recoverable issues encountered on
/// the way. `warnings` is empty for a fully clean parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWorkout {
    /// The parsed session.
    pub workout: Workout,
    /// Per-line issues that were skipped over, in input order.
    pub warnings: Vec<ParseWarning>,
}

/// Grammar state while consuming lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectTitle,
    ExpectDate,
    ReadingBody,
}

/// Parser for Strong app workout text exports.
#[derive(Debug, Clone, Default)]
pub struct WorkoutParser {
    classifier: LineClassifier,
}

impl WorkoutParser {
    /// Parser with the built-in Portuguese and English profiles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser over a custom language registry.
    #[must_use]
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            classifier: LineClassifier::new(registry),
        }
    }

    /// Cheap predicate: does this text look like a workout export at all?
    ///
    /// True when any line carries a set marker, a weight-by-reps expression,
    /// or a `strong.app` share link. Lets the chat collaborator ignore
    /// ordinary messages without attempting a full parse.
    #[must_use]
    pub fn is_workout_export(&self, text: &str) -> bool {
        text.lines().any(|raw| {
            let line = raw.trim();
            self.classifier.registry().match_set_line(line).is_some()
                || set_decoder::mentions_weight_reps(line)
                || line.to_lowercase().contains("strong.app")
        })
    }

    /// Parse one export into a [`ParsedWorkout`].
    ///
    /// # Errors
    /// - [`ParseError::MalformedInput`] when the date line matches no
    ///   registered pattern; no partial workout is returned.
    /// - [`ParseError::EmptyWorkout`] when, after dropping empty exercises,
    ///   no exercise remains.
    pub fn parse(&self, text: &str) -> ParseResult<ParsedWorkout> {
        let mut state = State::ExpectTitle;
        let mut title = String::new();
        let mut performed_at = None;
        let mut exercises: Vec<Exercise> = Vec::new();
        let mut current: Option<Exercise> = None;
        let mut warnings: Vec<ParseWarning> = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();
            // Blank lines are separators only; they never advance the grammar.
            if line.is_empty() {
                continue;
            }
            // Share links appended by the app carry no workout data.
            if line.starts_with("http://") || line.starts_with("https://") {
                continue;
            }

            match state {
                State::ExpectTitle => {
                    title = line.to_owned();
                    state = State::ExpectDate;
                }
                State::ExpectDate => match self.classifier.classify_date(line) {
                    Some(timestamp) => {
                        debug!(%timestamp, "parsed workout date");
                        performed_at = Some(timestamp);
                        state = State::ReadingBody;
                    }
                    None => {
                        warn!(line_number, line, "date line matched no registered pattern");
                        return Err(ParseError::MalformedInput {
                            line_number,
                            line: line.to_owned(),
                        });
                    }
                },
                State::ReadingBody => match self.classifier.classify_body(line) {
                    LineClass::SetLine { payload, warmup } => {
                        let Some(exercise) = current.as_mut() else {
                            warn!(line_number, line, "set line before any exercise header");
                            warnings.push(ParseWarning {
                                line_number,
                                line: line.to_owned(),
                                kind: WarningKind::OrphanedSet,
                            });
                            continue;
                        };
                        match set_decoder::decode(payload, warmup) {
                            Some(set) => exercise.sets.push(set),
                            None => {
                                warn!(line_number, line, "unrecognized set format");
                                warnings.push(ParseWarning {
                                    line_number,
                                    line: line.to_owned(),
                                    kind: WarningKind::UnrecognizedSetFormat,
                                });
                            }
                        }
                    }
                    LineClass::ExerciseHeader => {
                        Self::close_exercise(&mut exercises, current.take());
                        current = Some(Exercise::new(line));
                    }
                },
            }
        }

        Self::close_exercise(&mut exercises, current.take());

        let Some(performed_at) = performed_at else {
            // Input ended before a date line was seen.
            return Err(ParseError::MalformedInput {
                line_number: text.lines().count(),
                line: String::new(),
            });
        };
        if exercises.is_empty() {
            return Err(ParseError::EmptyWorkout);
        }

        let workout = Workout {
            title,
            performed_at,
            exercises,
        };
        debug!(
            title = %workout.title,
            exercises = workout.exercises.len(),
            sets = workout.total_sets(),
            warnings = warnings.len(),
            "parsed workout"
        );
        Ok(ParsedWorkout { workout, warnings })
    }

    /// Close the open exercise, dropping it when no set survived decoding.
    fn close_exercise(exercises: &mut Vec<Exercise>, open: Option<Exercise>) {
        if let Some(exercise) = open {
            if exercise.sets.is_empty() {
                debug!(name = %exercise.name, "dropping exercise with no sets");
            } else {
                exercises.push(exercise);
            }
        }
    }
}
