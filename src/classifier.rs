// ABOUTME: Lexical line classifier: tags each trimmed line against the language registry
// ABOUTME: Stateless per line; the grammar parser owns positional context and block boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Line Classifier
//!
//! Classifies one trimmed, non-empty line at a time. The classifier itself is
//! stateless - positional rules (first line is the title, second line is the
//! date) live in the grammar parser, which calls the method that matches its
//! current state:
//!
//! - [`LineClassifier::classify_date`] for the header date line;
//! - [`LineClassifier::classify_body`] for everything after the header, where
//!   a line is either a set line (a set marker matched, yielding a residual
//!   payload and a warm-up flag) or an exercise header (anything else).
//!
//! Blank lines are separators only; callers skip them before classifying.

use crate::language::LanguageRegistry;
use chrono::NaiveDateTime;

/// Classification of one body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A set line: the residual payload after the marker, plus whether the
    /// marker was a warm-up marker.
    SetLine {
        /// Everything after the marker and separator, trimmed.
        payload: &'a str,
        /// True when the warm-up prefix was used.
        warmup: bool,
    },
    /// Any non-blank body line that is not a set line opens a new exercise.
    ExerciseHeader,
}

/// Stateless per-line classifier over a [`LanguageRegistry`].
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    registry: LanguageRegistry,
}

impl LineClassifier {
    /// Classifier over the given registry.
    #[must_use]
    pub fn new(registry: LanguageRegistry) -> Self {
        Self { registry }
    }

    /// The registry this classifier consults.
    #[must_use]
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Classify a header date line. `None` means no registered date pattern
    /// matched, which is fatal for the whole parse.
    #[must_use]
    pub fn classify_date(&self, line: &str) -> Option<NaiveDateTime> {
        self.registry.parse_date(line)
    }

    /// Classify a body line as a set line or an exercise header.
    #[must_use]
    pub fn classify_body<'a>(&self, line: &'a str) -> LineClass<'a> {
        self.registry.match_set_line(line).map_or(
            LineClass::ExerciseHeader,
            |marker| LineClass::SetLine {
                payload: marker.payload,
                warmup: marker.warmup,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_lines_and_headers_are_distinguished() {
        let classifier = LineClassifier::default();

        assert_eq!(
            classifier.classify_body("Série 2: +10 kg × 20 reps"),
            LineClass::SetLine { payload: "+10 kg × 20 reps", warmup: false }
        );
        assert_eq!(
            classifier.classify_body("W: 9 reps"),
            LineClass::SetLine { payload: "9 reps", warmup: true }
        );
        assert_eq!(classifier.classify_body("Back Extension"), LineClass::ExerciseHeader);
        // Ordinal words without the marker shape stay headers.
        assert_eq!(classifier.classify_body("Séries até a falha"), LineClass::ExerciseHeader);
    }

    #[test]
    fn date_classification_is_profile_driven() {
        let classifier = LineClassifier::default();
        assert!(classifier.classify_date("quarta-feira, 8 de outubro de 2025 às 21:16").is_some());
        assert!(classifier.classify_date("not a date").is_none());
    }
}
