// ABOUTME: Decodes a set line's residual payload into a Weighted, Bodyweight, or Timed set
// ABOUTME: Owns numeric locale normalization so separator rules are testable in isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Set Decoder
//!
//! Turns the payload of one set line into a [`Set`] variant:
//!
//! - `60 kg × 12 reps` (also `x` or `*` as the multiplication sign, `+0 kg`
//!   for zero load, comma or period decimals) decodes as [`Set::Weighted`];
//! - `7:00` decodes as [`Set::Timed`];
//! - `9 reps` decodes as [`Set::Bodyweight`];
//! - anything else is unrecognized and the line is skipped by the parser.
//!
//! Zero reps never decode - a set with no repetitions carries no information
//! and is treated as unrecognized rather than silently kept.

use crate::models::Set;
use regex::Regex;
use std::sync::OnceLock;

static WEIGHTED: OnceLock<Regex> = OnceLock::new();
static BODYWEIGHT: OnceLock<Regex> = OnceLock::new();
static TIMED: OnceLock<Regex> = OnceLock::new();
static WEIGHT_REPS_ANYWHERE: OnceLock<Regex> = OnceLock::new();

fn weighted_re() -> &'static Regex {
    WEIGHTED.get_or_init(|| {
        Regex::new(r"(?i)^\+?\s*(?P<w>\d+(?:[.,]\d+)*)\s*kg\s*[×x*]\s*(?P<r>\d+)\s*reps?$")
            .expect("built-in pattern is valid")
    })
}

fn bodyweight_re() -> &'static Regex {
    BODYWEIGHT.get_or_init(|| {
        Regex::new(r"(?i)^(?P<r>\d+)\s*reps?$").expect("built-in pattern is valid")
    })
}

fn timed_re() -> &'static Regex {
    TIMED.get_or_init(|| {
        Regex::new(r"^(?P<m>\d{1,3}):(?P<s>[0-5]\d)$").expect("built-in pattern is valid")
    })
}

fn weight_reps_anywhere_re() -> &'static Regex {
    WEIGHT_REPS_ANYWHERE.get_or_init(|| {
        Regex::new(r"(?i)\d+\s*kg\s*[×x*]\s*\d+\s*reps?").expect("built-in pattern is valid")
    })
}

/// Normalize a localized numeric literal to an `f64`.
///
/// Both `,` and `.` are accepted as the decimal separator. When both appear,
/// the last one is the decimal separator and the other is a thousands
/// separator (`1.234,5` and `1,234.5` both read as 1234.5).
#[must_use]
pub fn normalize_decimal(raw: &str) -> Option<f64> {
    let comma = raw.rfind(',');
    let period = raw.rfind('.');
    let normalized = match (comma, period) {
        (Some(c), Some(p)) => {
            let (thousands, decimal) = if c > p { ('.', ',') } else { (',', '.') };
            raw.replace(thousands, "").replace(decimal, ".")
        }
        (Some(_), None) => raw.replace(',', "."),
        _ => raw.to_owned(),
    };
    normalized.parse().ok()
}

/// Decode one set-line payload. `warmup` comes from the originating marker.
///
/// Returns `None` when the payload matches none of the known set shapes;
/// the grammar parser records that as a recoverable warning and moves on.
#[must_use]
pub fn decode(payload: &str, warmup: bool) -> Option<Set> {
    let payload = payload.trim();

    if let Some(caps) = weighted_re().captures(payload) {
        let weight_kg = normalize_decimal(caps.name("w")?.as_str())?;
        let reps: u32 = caps.name("r")?.as_str().parse().ok()?;
        if reps == 0 {
            return None;
        }
        // Zero weight is valid: "+0 kg" is the export's bodyweight-variation
        // notation under the weighted syntax.
        return Some(Set::Weighted { weight_kg, reps, warmup });
    }

    if let Some(caps) = timed_re().captures(payload) {
        let minutes: u32 = caps.name("m")?.as_str().parse().ok()?;
        let seconds: u32 = caps.name("s")?.as_str().parse().ok()?;
        let duration_seconds = minutes * 60 + seconds;
        if duration_seconds == 0 {
            return None;
        }
        return Some(Set::Timed { duration_seconds });
    }

    if let Some(caps) = bodyweight_re().captures(payload) {
        let reps: u32 = caps.name("r")?.as_str().parse().ok()?;
        if reps == 0 {
            return None;
        }
        return Some(Set::Bodyweight { reps });
    }

    None
}

/// Whether a line mentions a weight-by-reps expression anywhere, e.g.
/// `60 kg × 12 reps`. Used by export detection, not by decoding.
#[must_use]
pub(crate) fn mentions_weight_reps(line: &str) -> bool {
    weight_reps_anywhere_re().is_match(line)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn weighted_set_with_explicit_plus_and_zero_weight() {
        assert_eq!(
            decode("+0 kg × 20 reps", false),
            Some(Set::Weighted { weight_kg: 0.0, reps: 20, warmup: false })
        );
    }

    #[test]
    fn weighted_set_carries_warmup_flag() {
        assert_eq!(
            decode("40 kg × 10 reps", true),
            Some(Set::Weighted { weight_kg: 40.0, reps: 10, warmup: true })
        );
    }

    #[test]
    fn weighted_set_accepts_ascii_multiplication_signs() {
        assert!(matches!(decode("60 kg x 12 reps", false), Some(Set::Weighted { .. })));
        assert!(matches!(decode("60 kg * 12 reps", false), Some(Set::Weighted { .. })));
    }

    #[test]
    fn comma_decimal_weight() {
        assert_eq!(
            decode("22,5 kg × 8 reps", false),
            Some(Set::Weighted { weight_kg: 22.5, reps: 8, warmup: false })
        );
    }

    #[test]
    fn bodyweight_set() {
        assert_eq!(decode("9 reps", false), Some(Set::Bodyweight { reps: 9 }));
        assert_eq!(decode("1 rep", false), Some(Set::Bodyweight { reps: 1 }));
    }

    #[test]
    fn timed_set() {
        assert_eq!(decode("7:00", false), Some(Set::Timed { duration_seconds: 420 }));
        assert_eq!(decode("12:34", false), Some(Set::Timed { duration_seconds: 754 }));
    }

    #[test]
    fn zero_reps_and_zero_duration_are_unrecognized() {
        assert_eq!(decode("10 kg × 0 reps", false), None);
        assert_eq!(decode("0 reps", false), None);
        assert_eq!(decode("0:00", false), None);
    }

    #[test]
    fn free_text_is_unrecognized() {
        assert_eq!(decode("felt heavy today", false), None);
        assert_eq!(decode("", false), None);
        assert_eq!(decode("kg × reps", false), None);
    }

    #[test]
    fn decimal_normalization_handles_both_separator_conventions() {
        assert_eq!(normalize_decimal("22,5"), Some(22.5));
        assert_eq!(normalize_decimal("22.5"), Some(22.5));
        assert_eq!(normalize_decimal("1.234,5"), Some(1234.5));
        assert_eq!(normalize_decimal("1,234.5"), Some(1234.5));
        assert_eq!(normalize_decimal("100"), Some(100.0));
        assert_eq!(normalize_decimal("not a number"), None);
    }
}
