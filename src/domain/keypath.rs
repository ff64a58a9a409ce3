//! Key paths: ordered segment sequences locating an item in the hierarchy.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// The one and only path separator. All joining and splitting goes through
/// `KeyPath`; nothing else in the crate may rejoin segments.
pub const SEPARATOR: char = '/';

/// Numeric segment with optional letter suffix, any digit width.
/// Used for normalization only; the strict grammar lives in `Segment`.
static NUMERIC_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([a-zA-Z]*)$").unwrap());

/// Ordered sequence of key segments, e.g. `00100/00200m/00100`.
///
/// Ordering is element-wise over segments. For the segment alphabet
/// (digits and lowercase letters, with the separator sorting below both)
/// this coincides with lexicographic order of the joined string, so
/// sibling ordering never depends on which representation is compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse and normalize a key string.
    ///
    /// Empty segments are skipped. Numeric segments are padded to five
    /// digits with their suffix preserved (`100m` becomes `00100m`);
    /// non-numeric "topic" segments (e.g. `english`) pass through
    /// unchanged.
    pub fn parse(id: &str) -> Self {
        let segments = id
            .split(SEPARATOR)
            .filter(|seg| !seg.is_empty())
            .map(normalize_segment)
            .collect();
        Self { segments }
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path with the final segment removed. `None` for empty paths.
    pub fn parent(&self) -> Option<KeyPath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// This path extended by one segment.
    pub fn child(&self, segment: &str) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Segment-wise prefix test, inclusive of equality.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Segment-wise proper prefix test: `self` is a strict ancestor path
    /// of `other`.
    pub fn is_proper_prefix_of(&self, other: &KeyPath) -> bool {
        self.segments.len() < other.segments.len() && other.starts_with(self)
    }
}

fn normalize_segment(seg: &str) -> String {
    if let Some(caps) = NUMERIC_SEGMENT_RE.captures(seg) {
        format!("{:0>5}{}", &caps[1], &caps[2])
    } else {
        seg.to_string()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.segments {
            if !first {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(seg)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_numeric_segments_when_parsing_then_pads_to_five_digits() {
        let path = KeyPath::parse("100/2m/00300");
        assert_eq!(path.segments(), &["00100", "00002m", "00300"]);
    }

    #[test]
    fn given_topic_segments_when_parsing_then_passes_through() {
        let path = KeyPath::parse("english/00100");
        assert_eq!(path.segments(), &["english", "00100"]);
    }

    #[test]
    fn given_empty_segments_when_parsing_then_skips_them() {
        let path = KeyPath::parse("/00100//00200/");
        assert_eq!(path.segments(), &["00100", "00200"]);
    }

    #[test]
    fn given_nested_path_when_taking_parent_then_drops_last_segment() {
        let path = KeyPath::parse("00100/00200");
        assert_eq!(path.parent(), Some(KeyPath::parse("00100")));
        assert_eq!(KeyPath::parse("").parent(), None);
    }

    #[test]
    fn given_ancestor_when_checking_prefix_then_matches_segment_wise() {
        let a = KeyPath::parse("00100");
        let ab = KeyPath::parse("00100/00200");
        assert!(a.is_proper_prefix_of(&ab));
        assert!(!ab.is_proper_prefix_of(&a));
        assert!(!a.is_proper_prefix_of(&a));
        // string prefix but not a segment prefix
        let similar = KeyPath::parse("00100m");
        assert!(!a.is_proper_prefix_of(&similar));
    }

    #[test]
    fn given_paths_when_comparing_then_order_matches_joined_text() {
        let a = KeyPath::parse("00100");
        let am = KeyPath::parse("00100m");
        let ab = KeyPath::parse("00100/00200");
        assert!(a < ab);
        assert!(ab < am);
        assert_eq!(a.to_string(), "00100");
        assert_eq!(ab.to_string(), "00100/00200");
    }
}
