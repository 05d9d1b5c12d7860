//! Melting temperature from base composition.
//!
//! Uses the basic GC formula
//!
//! ```text
//! Tm = 64.9 + 41 * (G + C - 16.4) / (A + T + G + C)
//! ```
//!
//! which depends only on the counts of each base, never on their order.
//!
//! # Examples
//! ```
//! use primerpair::melting::{tm, round_tm};
//! let t = tm(b"AAAAAAAAAAAAAAAAAAAA").unwrap();
//! assert_eq!(round_tm(t), 31.28);
//! ```
use crate::error::{PrimerError, Result};

/// Per-base counts of a window over `A`, `C`, `G`, `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseCounts {
    pub fn total(&self) -> usize { self.a + self.c + self.g + self.t }

    pub fn gc(&self) -> usize { self.g + self.c }
}

/// Count bases in `window`.
///
/// Any symbol outside `ACGT` is a [`PrimerError::MalformedSequence`] whose
/// `position` is the byte offset within `window`. An empty window is malformed too.
pub fn base_counts(window: &[u8]) -> Result<BaseCounts> {
    if window.is_empty() {
        return Err(PrimerError::MalformedSequence { symbol: None, position: 0 });
    }
    let mut n = BaseCounts::default();
    for (i, &b) in window.iter().enumerate() {
        match b {
            b'A' => n.a += 1,
            b'C' => n.c += 1,
            b'G' => n.g += 1,
            b'T' => n.t += 1,
            _ => {
                let symbol = String::from_utf8_lossy(&window[i..]).chars().next();
                return Err(PrimerError::MalformedSequence { symbol, position: i });
            }
        }
    }
    Ok(n)
}

/// Melting temperature of `window` in °C, unrounded.
pub fn tm(window: &[u8]) -> Result<f64> {
    let n = base_counts(window)?;
    Ok(64.9 + 41.0 * (n.gc() as f64 - 16.4) / n.total() as f64)
}

/// Round a temperature to 2 decimals, halves away from zero.
#[inline]
pub fn round_tm(t: f64) -> f64 { (t * 100.0).round() / 100.0 }

/// GC fraction of a window in `0.0..=1.0`.
pub fn gc_content(window: &[u8]) -> Result<f64> {
    let n = base_counts(window)?;
    Ok(n.gc() as f64 / n.total() as f64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')], len)
    }

    proptest! {
        #[test]
        fn tm_depends_only_on_composition(w in dna(1..=40), seed in any::<u64>()) {
            let mut shuffled = w.clone();
            // deterministic rotation + reversal keeps composition
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
            shuffled.reverse();
            prop_assert_eq!(base_counts(&w).unwrap(), base_counts(&shuffled).unwrap());
            prop_assert_eq!(tm(&w).unwrap(), tm(&shuffled).unwrap());
        }

        #[test]
        fn sorted_window_has_same_tm(w in dna(20..=23)) {
            let mut sorted = w.clone();
            sorted.sort_unstable();
            prop_assert_eq!(tm(&w).unwrap(), tm(&sorted).unwrap());
        }
    }
}
