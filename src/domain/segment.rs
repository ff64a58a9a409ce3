//! Key segment: 5-digit zero-padded base plus optional lowercase suffix.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::domain::keypath::SEPARATOR;

/// Strict segment grammar: exactly five digits, then zero or more lowercase letters.
static SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{5})([a-z]*)$").unwrap());

/// One hierarchy level's relative order: a numeric base with an optional
/// alphabetic suffix, e.g. `00100` or `00100m`.
///
/// Segments compare by their canonical text, which coincides with the
/// intended fractional ordering within the canonical 5-digit range. Bases
/// above 99999 format wider; their text sorts before 5-digit neighbors
/// and fails the grammar on re-parse, so the canonical range is the
/// operating envelope.
#[derive(Debug, Clone)]
pub struct Segment {
    text: String,
    base: u64,
    suffix: String,
}

impl Segment {
    /// Parse a segment, normalizing defensively.
    ///
    /// Inputs containing the path separator are truncated to their final
    /// component; callers must never pass a full path where a segment is
    /// expected, but the guard lives here once instead of at every call
    /// site. Inputs violating the grammar degrade to base 0 with an empty
    /// suffix and log a warning (signals upstream data corruption).
    pub fn parse(input: &str) -> Self {
        let seg = match input.rsplit_once(SEPARATOR) {
            Some((_, last)) => last,
            None => input,
        };

        if let Some(caps) = SEGMENT_RE.captures(seg) {
            let base: u64 = caps[1].parse().unwrap_or(0);
            let suffix = caps[2].to_string();
            Self::from_parts(base, suffix)
        } else {
            warn!("invalid segment {:?}, degrading to 00000", input);
            Self::from_parts(0, String::new())
        }
    }

    /// Segment with the given base and no suffix.
    pub fn from_base(base: u64) -> Self {
        Self::from_parts(base, String::new())
    }

    pub(crate) fn from_parts(base: u64, suffix: String) -> Self {
        let text = format!("{:05}{}", base, suffix);
        Self { text, base, suffix }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}
