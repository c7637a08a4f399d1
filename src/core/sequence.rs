//! Wraparound-aware sequence arithmetic.
//!
//! Sequence numbers live in a 16-bit space and wrap modulo 65536, so
//! "newer" cannot be decided with a plain integer comparison: shortly
//! after a wrap, 3 is newer than 65530. [`SeqNum`] resolves recency under
//! the assumption that two live sequence numbers never drift more than
//! half the space apart.

use std::fmt;
use std::ops::Sub;

use super::constants::HALF_SEQ_SPACE;

/// A 16-bit wrapping sequence number.
///
/// `Ord` is deliberately not implemented: the recency relation is only a
/// total order while compared values stay within half the sequence space
/// of each other, and a silent `<` would invite misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeqNum(u16);

impl SeqNum {
    /// The initial sequence number of every connection.
    pub const ZERO: Self = Self(0);

    /// Create a sequence number from its raw wire value.
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw wire value.
    pub fn get(self) -> u16 {
        self.0
    }

    /// The following sequence number, wrapping modulo 65536.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Whether `self` is more recent than `other`.
    ///
    /// Ties at exactly half the space resolve toward the larger raw
    /// value: 32768 is more recent than 0, but 0 is not more recent
    /// than 32768.
    pub fn more_recent_than(self, other: Self) -> bool {
        let (a, b) = (self.0, other.0);
        (a > b && a - b <= HALF_SEQ_SPACE) || (b > a && b - a > HALF_SEQ_SPACE)
    }
}

impl Sub for SeqNum {
    type Output = u16;

    /// Modular distance: how many packets `self` is ahead of `rhs`.
    fn sub(self, rhs: Self) -> u16 {
        self.0.wrapping_sub(rhs.0)
    }
}

impl From<u16> for SeqNum {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn more_recent(a: u16, b: u16) -> bool {
        SeqNum::new(a).more_recent_than(SeqNum::new(b))
    }

    #[test]
    fn test_plain_ordering() {
        assert!(more_recent(1, 0));
        assert!(more_recent(100, 3));
        assert!(!more_recent(3, 100));
        assert!(!more_recent(0, 0));
    }

    #[test]
    fn test_wraparound_ordering() {
        // Numbers just past the wrap are newer than numbers just before it.
        assert!(more_recent(0, 65535));
        assert!(more_recent(3, 65530));
        assert!(!more_recent(65535, 0));
        assert!(!more_recent(65530, 3));
    }

    #[test]
    fn test_half_space_boundary() {
        assert!(more_recent(32768, 0));
        assert!(!more_recent(0, 32768));
        assert!(more_recent(0, 32769));
        assert!(!more_recent(32769, 0));
    }

    #[test]
    fn test_trichotomy_sampled() {
        // Exactly one of (a newer than b), (b newer than a) for a != b,
        // sampled across the space with a stride coprime to 65536.
        let samples: Vec<u16> = (0u32..65536).step_by(251).map(|v| v as u16).collect();
        for &a in &samples {
            assert!(!more_recent(a, a));
            for &b in &samples {
                if a != b {
                    assert_ne!(more_recent(a, b), more_recent(b, a), "a={a} b={b}");
                }
            }
        }
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(SeqNum::new(0).next(), SeqNum::new(1));
        assert_eq!(SeqNum::new(65535).next(), SeqNum::ZERO);
    }

    #[test]
    fn test_modular_distance() {
        assert_eq!(SeqNum::new(10) - SeqNum::new(3), 7);
        assert_eq!(SeqNum::new(2) - SeqNum::new(65535), 3);
        assert_eq!(SeqNum::new(0) - SeqNum::new(0), 0);
    }
}
