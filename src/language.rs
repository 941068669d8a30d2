// ABOUTME: Language profiles for the line classifier: set markers, warm-up markers, date patterns
// ABOUTME: Adding a language is adding a profile value to the registry, not a code change
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Language Profiles
//!
//! The Strong app localizes its exports. A [`LanguageProfile`] captures one
//! locale's vocabulary as data: the set-marker prefix (`Série 1:` / `Set 1:`),
//! the warm-up marker (`W:`), and the long-form date pattern with its
//! month-name table. The [`LanguageRegistry`] holds all registered profiles
//! plus a numeric fallback date pattern, and answers the two questions the
//! classifier asks: "is this line a set line?" and "is this line a date?".
//!
//! All registered profiles are tried in order; the first match wins. Profile
//! vocabularies must therefore not overlap ambiguously on the same line.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

/// Compile a pattern known to be valid at authoring time.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// A date pattern plus the month-name table needed to resolve it.
///
/// The regex must expose named captures `day`, `month`, and `year`; `hour`,
/// `minute`, and `ampm` are optional. When `months` is empty the `month`
/// capture is parsed as a number instead of looked up.
#[derive(Debug, Clone)]
pub struct DatePattern {
    pattern: Regex,
    months: Vec<&'static str>,
}

impl DatePattern {
    /// Create a date pattern from a regex and a month-name table.
    ///
    /// # Errors
    /// Returns `regex::Error` if the pattern does not compile.
    pub fn new(pattern: &str, months: Vec<&'static str>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            months,
        })
    }

    /// Try to read a wall-clock timestamp out of one trimmed line.
    ///
    /// A date without a time component is accepted; the time defaults to
    /// midnight, matching how lenient date parsers treat such input.
    #[must_use]
    pub fn parse(&self, line: &str) -> Option<NaiveDateTime> {
        let caps = self.pattern.captures(line)?;
        let day: u32 = caps.name("day")?.as_str().parse().ok()?;
        let year: i32 = caps.name("year")?.as_str().parse().ok()?;
        let month_raw = caps.name("month")?.as_str();
        let month = if self.months.is_empty() {
            month_raw.parse().ok()?
        } else {
            self.lookup_month(month_raw)?
        };

        let mut hour: u32 = caps
            .name("hour")
            .map_or(Ok(0), |m| m.as_str().parse())
            .ok()?;
        let minute: u32 = caps
            .name("minute")
            .map_or(Ok(0), |m| m.as_str().parse())
            .ok()?;
        if let Some(ampm) = caps.name("ampm") {
            hour = match (ampm.as_str().to_ascii_uppercase().as_str(), hour) {
                ("PM", h) if h < 12 => h + 12,
                ("AM", 12) => 0,
                (_, h) => h,
            };
        }

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
    }

    /// Resolve a month name to its 1-based number.
    ///
    /// Abbreviations of three letters or more are accepted ("out", "Oct").
    fn lookup_month(&self, raw: &str) -> Option<u32> {
        let needle = raw.to_lowercase();
        let index = self.months.iter().position(|m| {
            *m == needle || (needle.len() >= 3 && m.starts_with(needle.as_str()))
        })?;
        u32::try_from(index + 1).ok()
    }
}

/// A matched set marker: the residual payload and whether the marker was a
/// warm-up marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetMarker<'a> {
    /// Everything after the marker and its separator, trimmed.
    pub payload: &'a str,
    /// True when the line used the warm-up prefix instead of a numbered one.
    pub warmup: bool,
}

/// One locale's export vocabulary.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Short identifier, e.g. `"pt"` or `"en"`.
    pub name: &'static str,
    set_marker: Regex,
    warmup_marker: Regex,
    date: DatePattern,
}

impl LanguageProfile {
    /// Build a custom profile from raw patterns.
    ///
    /// `set_marker` and `warmup_marker` must expose a named capture `payload`.
    ///
    /// # Errors
    /// Returns `regex::Error` if any pattern does not compile.
    pub fn new(
        name: &'static str,
        set_marker: &str,
        warmup_marker: &str,
        date: DatePattern,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            set_marker: Regex::new(set_marker)?,
            warmup_marker: Regex::new(warmup_marker)?,
            date,
        })
    }

    /// Built-in Portuguese profile.
    ///
    /// Matches `Série 1: ...` set lines and long-form dates like
    /// `quarta-feira, 8 de outubro de 2025 às 21:16`.
    #[must_use]
    pub fn portuguese() -> Self {
        Self {
            name: "pt",
            set_marker: compile(r"(?i)^s[ée]rie\s*\d+\s*:\s*(?P<payload>.*)$"),
            warmup_marker: compile(r"(?i)^w\s*:\s*(?P<payload>.*)$"),
            date: DatePattern {
                pattern: compile(
                    r"(?i)^(?:\p{L}+(?:-feira)?,?\s+)?(?P<day>\d{1,2})\s+de\s+(?P<month>\p{L}+)\s+de\s+(?P<year>\d{4})(?:\s+(?:às|as)\s+(?P<hour>\d{1,2}):(?P<minute>\d{2}))?$",
                ),
                months: vec![
                    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
                    "setembro", "outubro", "novembro", "dezembro",
                ],
            },
        }
    }

    /// Built-in English profile.
    ///
    /// Matches `Set 1: ...` set lines, the `W:` warm-up prefix, and dates like
    /// `Wednesday, October 8, 2025 at 9:16 PM`.
    #[must_use]
    pub fn english() -> Self {
        Self {
            name: "en",
            set_marker: compile(r"(?i)^set\s*\d+\s*:\s*(?P<payload>.*)$"),
            warmup_marker: compile(r"(?i)^w\s*:\s*(?P<payload>.*)$"),
            date: DatePattern {
                pattern: compile(
                    r"(?i)^(?:\p{L}+,?\s+)?(?P<month>\p{L}+)\.?\s+(?P<day>\d{1,2}),?\s+(?P<year>\d{4})(?:,?\s+(?:at\s+)?(?P<hour>\d{1,2}):(?P<minute>\d{2})\s*(?P<ampm>[AaPp][Mm])?)?$",
                ),
                months: vec![
                    "january", "february", "march", "april", "may", "june", "july", "august",
                    "september", "october", "november", "december",
                ],
            },
        }
    }

    /// Try both markers against one trimmed line.
    #[must_use]
    pub fn match_set_line<'a>(&self, line: &'a str) -> Option<SetMarker<'a>> {
        if let Some(caps) = self.warmup_marker.captures(line) {
            let payload = caps.name("payload").map_or("", |m| m.as_str()).trim();
            return Some(SetMarker { payload, warmup: true });
        }
        if let Some(caps) = self.set_marker.captures(line) {
            let payload = caps.name("payload").map_or("", |m| m.as_str()).trim();
            return Some(SetMarker { payload, warmup: false });
        }
        None
    }

    /// Try this profile's date pattern against one trimmed line.
    #[must_use]
    pub fn parse_date(&self, line: &str) -> Option<NaiveDateTime> {
        self.date.parse(line)
    }
}

/// The set of registered language profiles plus a numeric fallback date
/// pattern, tried last.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
    fallback_date: DatePattern,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LanguageRegistry {
    /// Registry with the built-in Portuguese and English profiles and an
    /// ISO-like `YYYY-MM-DD HH:MM` fallback date pattern.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            profiles: vec![LanguageProfile::portuguese(), LanguageProfile::english()],
            fallback_date: DatePattern {
                pattern: compile(
                    r"^(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})(?:[ T](?P<hour>\d{1,2}):(?P<minute>\d{2}))?$",
                ),
                months: Vec::new(),
            },
        }
    }

    /// Register an additional profile. Profiles are tried in registration
    /// order; built-ins come first.
    pub fn register(&mut self, profile: LanguageProfile) {
        self.profiles.push(profile);
    }

    /// The registered profiles, in trial order.
    #[must_use]
    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    /// First set marker that matches wins.
    #[must_use]
    pub fn match_set_line<'a>(&self, line: &'a str) -> Option<SetMarker<'a>> {
        self.profiles.iter().find_map(|p| p.match_set_line(line))
    }

    /// First date pattern that matches wins; the numeric fallback is tried
    /// after every profile.
    #[must_use]
    pub fn parse_date(&self, line: &str) -> Option<NaiveDateTime> {
        self.profiles
            .iter()
            .find_map(|p| p.parse_date(line))
            .or_else(|| self.fallback_date.parse(line))
    }
}
