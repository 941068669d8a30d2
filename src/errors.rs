// ABOUTME: Error taxonomy for workout parsing: fatal errors and recoverable warnings
// ABOUTME: Fatal errors abort with no partial result; warnings travel with the parsed workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Parse Errors and Warnings
//!
//! Two severities, two types:
//!
//! - [`ParseError`] - fatal. The header could not be parsed or nothing usable
//!   remained. No workout is returned.
//! - [`ParseWarning`] - recoverable. A single line was skipped; parsing
//!   continued and the warning is attached to the result so the caller can
//!   surface it without losing the rest of the workout.
//!
//! The core never retries - it has no I/O to retry. Callers turn these values
//! into user-visible diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fatal parse failure. No partial workout accompanies these.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The title/date header could not be parsed. Carries the offending line
    /// so the caller can render a diagnostic.
    #[error("line {line_number}: not a recognized workout date: {line:?}")]
    MalformedInput {
        /// 1-based line number within the input.
        line_number: usize,
        /// The offending line, trimmed.
        line: String,
    },

    /// The header parsed but no exercise with at least one set remained.
    #[error("no exercises with at least one set were found")]
    EmptyWorkout,
}

/// Result type alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A recoverable per-line issue recorded while parsing continued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number within the input.
    pub line_number: usize,
    /// The skipped line, trimmed.
    pub line: String,
    /// What went wrong with the line.
    pub kind: WarningKind,
}

/// Classification of a recoverable parse issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A set line appeared before any exercise header; the set has no home.
    OrphanedSet,
    /// A set line's payload matched none of the known set shapes.
    UnrecognizedSetFormat,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            WarningKind::OrphanedSet => "set before any exercise header",
            WarningKind::UnrecognizedSetFormat => "unrecognized set format",
        };
        write!(f, "line {}: {} (skipped): {:?}", self.line_number, what, self.line)
    }
}
