//! Core types for **codons**, **coding regions**, **candidate primers** and **primer pairs**.
//!
//! This module holds the data model used across the crate. Every value here is
//! derived once from the input sequence and never mutated afterwards.
//!
//! Positions are 0-based indices into the normalized sequence.
use core::fmt;

use serde::Serialize;

/// The only start codon recognised.
pub const START_CODON: &str = "ATG";

/// Shortest primer emitted.
pub const PRIMER_MIN_LEN: usize = 20;

/// Longest primer emitted.
pub const PRIMER_MAX_LEN: usize = 23;

/// How far upstream of a codon a primer window may begin.
pub const ANCHOR_SPAN: usize = 20;

/// Bases shown either side of a codon in failure diagnostics.
pub const CONTEXT_FLANK: usize = 20;

/// One of the three terminator codons.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StopCodon {
    Tag,
    Tga,
    Taa,
}

impl StopCodon {
    /// All stop codons in the order they are tested.
    pub const ALL: [StopCodon; 3] = [StopCodon::Tag, StopCodon::Tga, StopCodon::Taa];

    /// Uppercase nucleotide string of the codon.
    pub fn as_str(self) -> &'static str {
        match self {
            StopCodon::Tag => "TAG",
            StopCodon::Tga => "TGA",
            StopCodon::Taa => "TAA",
        }
    }

    /// Match a 3-letter window; anything shorter or different is `None`.
    pub fn from_window(window: &[u8]) -> Option<StopCodon> {
        Self::ALL.into_iter().find(|c| c.as_str().as_bytes() == window)
    }
}

impl fmt::Display for StopCodon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// The coding region between the first `ATG` and its first in-frame stop codon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CodingRegion {
    /// Index of the first `ATG`.
    pub start: usize,
    /// Index of the in-frame stop codon.
    pub stop_pos: usize,
    /// Which terminator was found at `stop_pos`.
    pub stop_codon: StopCodon,
}

impl CodingRegion {
    /// Distance from the start codon to the stop codon, the quantity the length policy checks.
    pub fn span(&self) -> usize { self.stop_pos - self.start }
}

/// Which side of the coding region a primer belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        })
    }
}

/// A primer window that passed the temperature and codon filters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candidate {
    /// Primer bases, 5'→3'. For a selected reverse primer this is the reverse complement.
    pub sequence: String,
    /// Start of the window on the template strand.
    pub position: usize,
    /// Melting temperature in °C, rounded to 2 decimals.
    pub tm: f64,
}

impl Candidate {
    pub fn len(&self) -> usize { self.sequence.len() }

    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }
}

/// Forward and reverse candidates in enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CandidateSet {
    pub forward: Vec<Candidate>,
    pub reverse: Vec<Candidate>,
}

/// A selected primer pair. The reverse primer is already reverse-complemented.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimerPair {
    pub forward: Candidate,
    pub reverse: Candidate,
}

impl PrimerPair {
    /// Absolute difference of the two melting temperatures.
    pub fn tm_difference(&self) -> f64 { (self.forward.tm - self.reverse.tm).abs() }
}

/// Sequence neighbourhood of a codon, used by "no primer found" diagnostics.
///
/// Holds up to [`CONTEXT_FLANK`] bases either side, clamped at the sequence
/// ends, so a fully interior codon yields 43 nucleotides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodonContext {
    pub upstream: String,
    pub codon: String,
    pub downstream: String,
}

impl CodonContext {
    /// Cut the neighbourhood of the codon starting at `pos`.
    pub fn around(seq: &[u8], pos: usize) -> Self {
        let len = seq.len();
        let pos = pos.min(len);
        let codon_end = (pos + 3).min(len);
        let down_end = (codon_end + CONTEXT_FLANK).min(len);
        let text = |r: core::ops::Range<usize>| String::from_utf8_lossy(&seq[r]).into_owned();
        Self {
            upstream: text(pos.saturating_sub(CONTEXT_FLANK)..pos),
            codon: text(pos..codon_end),
            downstream: text(codon_end..down_end),
        }
    }

    /// Total number of nucleotides shown.
    pub fn len(&self) -> usize { self.upstream.len() + self.codon.len() + self.downstream.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Everything a successful run produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimerDesign {
    pub region: CodingRegion,
    pub candidates: CandidateSet,
    /// Selected pairs; exactly one under the first-feasible strategy.
    pub pairs: Vec<PrimerPair>,
}

impl PrimerDesign {
    /// The first selected pair.
    pub fn best(&self) -> Option<&PrimerPair> { self.pairs.first() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_codon_matches_only_full_windows() {
        assert_eq!(StopCodon::from_window(b"TGA"), Some(StopCodon::Tga));
        assert_eq!(StopCodon::from_window(b"TA"), None);
        assert_eq!(StopCodon::from_window(b"ATG"), None);
    }

    #[test]
    fn context_is_43_nt_when_interior() {
        let seq = format!("{}ATG{}", "C".repeat(30), "G".repeat(30));
        let ctx = CodonContext::around(seq.as_bytes(), 30);
        assert_eq!(ctx.len(), 43);
        assert_eq!(ctx.codon, "ATG");
        assert_eq!(ctx.upstream, "C".repeat(20));
    }

    #[test]
    fn context_is_clamped_at_sequence_ends() {
        let ctx = CodonContext::around(b"CCATGGG", 2);
        assert_eq!(ctx.upstream, "CC");
        assert_eq!(ctx.codon, "ATG");
        assert_eq!(ctx.downstream, "GG");
    }

    #[test]
    fn region_span_is_start_to_stop_distance() {
        let r = CodingRegion { start: 3, stop_pos: 15, stop_codon: StopCodon::Taa };
        assert_eq!(r.span(), 12);
    }
}
