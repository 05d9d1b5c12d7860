//! Primer pair selection and reverse complementing.
//!
//! The default [`PairStrategy::FirstFeasiblePair`] looks at the **first**
//! reverse candidate only and takes the first forward candidate whose
//! temperature lies within the tolerance. Later reverse candidates are never
//! examined, even when the first one has no partner.
//!
//! # Examples
//! ```
//! use primerpair::select::reverse_complement;
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//! ```
use serde::Serialize;

use crate::error::{PrimerError, Result};
use crate::primer::{Candidate, CandidateSet, PrimerPair};

/// Default largest allowed Tm difference between the two primers (°C).
pub const MAX_TM_DIFFERENCE: f64 = 4.0;

/// How forward and reverse candidates are matched up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStrategy {
    /// First reverse candidate, first forward candidate within tolerance; nothing else.
    #[default]
    FirstFeasiblePair,
    /// Every pair within tolerance, reverse-major in enumeration order.
    AllFeasiblePairs,
}

impl std::str::FromStr for PairStrategy {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "first-feasible" | "first_feasible_pair" => Ok(Self::FirstFeasiblePair),
            "all" | "all-feasible" | "all_feasible_pairs" => Ok(Self::AllFeasiblePairs),
            other => Err(format!("Unknown pairing strategy: {}", other)),
        }
    }
}

/// Reverse complement of a primer: read last to first, swapping A/T and C/G.
///
/// Only `ACGT` reach this point; anything else is dropped.
pub fn reverse_complement(primer: &str) -> String {
    primer
        .bytes()
        .rev()
        .filter_map(|b| match b {
            b'A' => Some('T'),
            b'T' => Some('A'),
            b'C' => Some('G'),
            b'G' => Some('C'),
            _ => None,
        })
        .collect()
}

#[inline]
fn within(forward: &Candidate, reverse: &Candidate, tolerance: f64) -> bool {
    forward.tm >= reverse.tm - tolerance && forward.tm <= reverse.tm + tolerance
}

fn make_pair(forward: &Candidate, reverse: &Candidate) -> PrimerPair {
    PrimerPair {
        forward: forward.clone(),
        reverse: Candidate { sequence: reverse_complement(&reverse.sequence), ..reverse.clone() },
    }
}

/// First reverse candidate paired with the first forward candidate in tolerance.
pub fn first_feasible_pair(set: &CandidateSet, tolerance: f64) -> Result<PrimerPair> {
    let reverse = set.reverse.first().ok_or(PrimerError::NoPairFound)?;
    set.forward
        .iter()
        .find(|f| within(f, reverse, tolerance))
        .map(|f| make_pair(f, reverse))
        .ok_or(PrimerError::NoPairFound)
}

/// Every pair in tolerance, grouped by reverse candidate.
pub fn all_feasible_pairs(set: &CandidateSet, tolerance: f64) -> Result<Vec<PrimerPair>> {
    let pairs: Vec<PrimerPair> = set
        .reverse
        .iter()
        .flat_map(|r| set.forward.iter().filter(move |f| within(f, r, tolerance)).map(move |f| make_pair(f, r)))
        .collect();
    if pairs.is_empty() { Err(PrimerError::NoPairFound) } else { Ok(pairs) }
}

/// Select pair(s) with the requested strategy.
pub fn select_pairs(set: &CandidateSet, strategy: PairStrategy, tolerance: f64) -> Result<Vec<PrimerPair>> {
    match strategy {
        PairStrategy::FirstFeasiblePair => first_feasible_pair(set, tolerance).map(|p| vec![p]),
        PairStrategy::AllFeasiblePairs => all_feasible_pairs(set, tolerance),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_complement_is_an_involution(s in "[ACGT]{0,40}") {
            prop_assert_eq!(reverse_complement(&reverse_complement(&s)), s);
        }

        #[test]
        fn reverse_complement_keeps_length(s in "[ACGT]{20,23}") {
            prop_assert_eq!(reverse_complement(&s).len(), s.len());
        }
    }
}
