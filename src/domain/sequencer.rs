//! Fractional key generation: derive a segment strictly between two neighbors.

use tracing::instrument;

use crate::domain::segment::Segment;

/// Base of the very first segment in an empty sibling list.
/// Leaves integer headroom below for head-insertions.
pub const FIRST_BASE: u64 = 100;

/// Integer step for tail appends: ~99 future insertions fit between two
/// appended siblings before suffix extension kicks in.
const APPEND_STEP: u64 = 100;

/// Implicit lower bound when the previous suffix is exhausted.
const FLOOR_CHAR: u8 = b'a';
/// One past `'z'`: implicit upper bound when the next suffix is absent
/// or exhausted.
const CEIL_CHAR: u8 = b'z' + 1;

/// Generates key segments that sort strictly between their neighbors.
///
/// Pure and deterministic: identical neighbor pairs always yield the same
/// segment. The caller sequences neighbor reads and the persisted write;
/// generating against a stale neighbor pair can collide.
#[derive(Debug, Default)]
pub struct KeySequencer;

impl KeySequencer {
    pub fn new() -> Self {
        Self
    }

    /// Derive a segment sorting after `prev` (if given) and before `next`
    /// (if given).
    ///
    /// Two boundaries are excepted, both at the floor of their range:
    /// inserting below the absolute floor (`next` with base 0) yields a
    /// suffixed floor segment such as `00000m`, which sorts *after* a
    /// bare `00000` under plain string comparison; and a `next` equal to
    /// `prev` extended by a run of `'a'`s admits no in-between segment,
    /// so the result extends past `next` (see `mid_suffix`). `00000`
    /// is reserved headroom that normal generation only reaches through
    /// repeated head-insertion, and `'a'`-run neighbors only arise from
    /// keys minted outside this generator.
    #[instrument(level = "debug", skip(self))]
    pub fn generate(&self, prev: Option<&Segment>, next: Option<&Segment>) -> Segment {
        match (prev, next) {
            // first born
            (None, None) => Segment::from_base(FIRST_BASE),

            // tail append
            (Some(p), None) => Segment::from_base(p.base() + APPEND_STEP),

            // head insert: halve the integer gap below next
            (None, Some(n)) => {
                if n.base() > 1 {
                    Segment::from_base(n.base() / 2)
                } else if n.base() == 1 {
                    Segment::from_base(0)
                } else {
                    // no integer room below the floor
                    Segment::from_parts(0, "m".to_string())
                }
            }

            // middle insert
            (Some(p), Some(n)) => {
                if n.base() > p.base() + 1 {
                    return Segment::from_base((p.base() + n.base()) / 2);
                }
                // Adjacent or equal bases: bisect in prev's suffix space.
                // With distinct bases (e.g. 00100 vs 00101) next's suffix
                // belongs to a different base and imposes no upper bound.
                let upper = if n.base() == p.base() {
                    Some(n.suffix())
                } else {
                    None
                };
                let suffix = mid_suffix(p.suffix(), upper);
                Segment::from_parts(p.base(), suffix)
            }
        }
    }
}

/// Alphabetic bisection: a string strictly between `prev` and `next`,
/// where `None` means "infinity".
///
/// Scans position by position. Identical characters carry through; a gap
/// wider than one code unit emits the midpoint and stops; adjacent
/// characters release the upper bound for all deeper positions; a lower
/// bound already at `'z'` extends the length by one. Positions where
/// `prev` is exhausted contribute the virtual floor `'a'` to the result so
/// the output stays strictly below `next` even when the bounds share a
/// prefix beyond `prev`'s length.
///
/// One pair family is unsatisfiable: when `next` is `prev` extended by a
/// run of `'a'`s, no string sorts strictly between the two at all. The
/// result then stays above `prev` but extends past `next` (the
/// suffix-space analogue of the `00000m` floor overflow).
///
/// Terminates within `max(len(prev), len(next)) + 1` positions.
fn mid_suffix(prev: &str, next: Option<&str>) -> String {
    let prev_b = prev.as_bytes();
    let next_b = next.map(str::as_bytes);

    let len = prev_b.len().max(next_b.map_or(0, |n| n.len())) + 1;
    let mut bounded = next_b.is_some();
    let mut out: Vec<u8> = Vec::with_capacity(len);

    for i in 0..len {
        let lo = prev_b.get(i).copied().unwrap_or(FLOOR_CHAR);
        let hi = if bounded {
            next_b
                .and_then(|n| n.get(i))
                .copied()
                .unwrap_or(CEIL_CHAR)
        } else {
            CEIL_CHAR
        };

        if hi == lo {
            out.push(lo);
            continue;
        }
        if hi > lo + 1 {
            out.push((lo + hi) / 2);
            return String::from_utf8(out).expect("segment suffixes are ascii");
        }
        if hi == lo + 1 {
            // adjacent: nothing fits at this position, but any deeper
            // character keeps the result below next
            bounded = false;
        }
        out.push(lo);
    }

    // only reachable for degenerate bounds (prev == next)
    format!("{prev}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid(prev: &str, next: Option<&str>) -> String {
        mid_suffix(prev, next)
    }

    #[test]
    fn given_empty_bounds_when_bisecting_then_emits_mid_alphabet() {
        assert_eq!(mid("", None), "n");
    }

    #[test]
    fn given_wide_gap_when_bisecting_then_emits_midpoint() {
        assert_eq!(mid("", Some("m")), "g");
        assert_eq!(mid("b", Some("x")), "m");
    }

    #[test]
    fn given_adjacent_bounds_when_bisecting_then_descends() {
        assert_eq!(mid("a", Some("b")), "an");
        assert_eq!(mid("m", Some("n")), "mn");
    }

    #[test]
    fn given_saturated_lower_bound_when_bisecting_then_extends_length() {
        assert_eq!(mid("z", None), "zn");
        assert_eq!(mid("zz", None), "zzn");
    }

    #[test]
    fn given_next_extending_prev_by_floor_run_when_bisecting_then_no_gap_exists() {
        // 'a' is the smallest suffix character, so nothing sorts
        // strictly between a suffix and that suffix plus a run of 'a's.
        // The result stays above prev and extends past next instead.
        assert_eq!(mid("", Some("a")), "an");
        assert_eq!(mid("b", Some("ba")), "ban");
        assert_eq!(mid("", Some("aa")), "aan");
    }

    #[test]
    fn given_exhausted_lower_bound_when_bisecting_then_pads_with_floor() {
        // upper bound continues past prev's length with small characters
        let s = mid("", Some("abc"));
        assert_eq!(s, "aan");
        assert!(!s.is_empty());
        assert!(s.as_str() < "abc");
    }

    #[test]
    fn given_bounds_when_bisecting_then_result_is_strictly_between() {
        let cases = [
            ("", Some("abc")),
            ("a", Some("abc")),
            ("ab", Some("ac")),
            ("m", Some("mb")),
            ("gz", Some("h")),
            ("y", Some("z")),
        ];
        for (prev, next) in cases {
            let s = mid(prev, next);
            assert!(s.as_str() > prev, "{s:?} !> {prev:?}");
            assert!(s.as_str() < next.unwrap(), "{s:?} !< {next:?}");
        }
    }
}
