#![forbid(unsafe_code)]
//! # primerpair
//!
//! Locate the first coding region of a DNA sequence and design a PCR **primer
//! pair** flanking it, selected by **melting temperature**.
//!
//! ## Pipeline
//! 1. [`seqio::normalize`]: drop the header line, join and uppercase the body.
//! 2. [`locate::locate_coding_region`]: first `ATG`, first in-frame `TAG`/`TGA`/`TAA`.
//! 3. [`candidates::generate_candidates`]: 20–23 nt windows ending on either
//!    codon, scored with [`melting::tm`] and filtered by the temperature window.
//! 4. [`select::select_pairs`]: pair forward and reverse candidates within
//!    4 °C and reverse-complement the reverse primer.
//!
//! Every step is a pure function of its inputs; [`design_primers`] chains them
//! with an explicit [`PrimerConfig`].
//!
//! ## Examples
//! ```rust
//! use primerpair::{design_primers, PrimerConfig, PrimerError};
//! let raw = ">demo gene\n\
//!     GATCCGTAGCTAGGCTCAGGCTACGCTGCACATGGCTAGCAAGCTCGGCATCGCCAAGGCTTCGCGCAACG\n\
//!     TCCTGGCCAAGCGCTAAGCGTCAGGCTTCACGCTCAGCGATCGCTAC\n";
//! let design = design_primers(raw, &PrimerConfig::default()).unwrap();
//! let pair = design.best().unwrap();
//! assert_eq!(pair.forward.sequence, "AGGCTCAGGCTACGCTGCACATG");
//! assert_eq!(pair.reverse.sequence, "TTAGCGCTTGGCCAGGACGTTGC");
//!
//! // Terminal conditions come back as errors, never panics.
//! assert_eq!(design_primers(">x\nCCCCGGGG", &PrimerConfig::default()), Err(PrimerError::NoStartCodon));
//! ```
//!
//! ## Version
//! See [`VERSION`].

pub mod candidates;
pub mod config;
pub mod error;
pub mod locate;
pub mod melting;
pub mod primer;
pub mod report;
pub mod select;
pub mod seqio;

pub use config::PrimerConfig;
pub use error::{PrimerError, Result};
pub use primer::{Candidate, CandidateSet, CodingRegion, PrimerDesign, PrimerPair, StopCodon};
pub use select::PairStrategy;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the whole design on an already normalized sequence.
pub fn design_from_sequence(seq: &seqio::Sequence, config: &PrimerConfig) -> Result<PrimerDesign> {
    let region = locate::locate_coding_region(seq)?;
    let candidates = candidates::generate_candidates(seq, &region, config)?;
    let pairs = select::select_pairs(&candidates, config.strategy, config.max_tm_difference)?;
    log::debug!("selected {} pair(s) with {:?}", pairs.len(), config.strategy);
    Ok(PrimerDesign { region, candidates, pairs })
}

/// Design a primer pair from raw file contents (header line plus sequence lines).
///
/// # Errors
/// Any of the terminal [`PrimerError`] conditions; the first one hit ends the run.
pub fn design_primers(raw: &str, config: &PrimerConfig) -> Result<PrimerDesign> {
    design_from_sequence(&seqio::normalize(raw), config)
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    const DEMO: &str = ">demo gene\n\
        GATCCGTAGCTAGGCTCAGGCTACGCTGCACATGGCTAGCAAGCTCGGCATCGCCAAGGCTTCGCGCAACG\n\
        TCCTGGCCAAGCGCTAAGCGTCAGGCTTCACGCTCAGCGATCGCTAC\n";

    #[test]
    fn demo_gene_yields_first_feasible_pair() {
        let d = design_primers(DEMO, &PrimerConfig::default()).unwrap();
        assert_eq!((d.region.start, d.region.stop_pos, d.region.stop_codon), (31, 85, StopCodon::Taa));
        assert_eq!(d.candidates.forward.len(), 67);
        assert_eq!(d.candidates.reverse.len(), 63);
        assert_eq!(d.pairs.len(), 1);
        let p = &d.pairs[0];
        assert_eq!(p.forward, Candidate { sequence: "AGGCTCAGGCTACGCTGCACATG".into(), position: 11, tm: 60.62 });
        assert_eq!(p.reverse, Candidate { sequence: "TTAGCGCTTGGCCAGGACGTTGC".into(), position: 65, tm: 60.62 });
        assert!(p.tm_difference() <= 4.0);
    }

    #[test]
    fn minimal_sequence_never_panics() {
        let raw = "HEADER\nATGAAAAAAAAAAAAAAAAAAAAAAAAAAAAATAA";
        match design_primers(raw, &PrimerConfig::default()) {
            Ok(d) => {
                let p = d.best().unwrap();
                assert!((p.forward.tm - p.reverse.tm).abs() <= 4.0);
            }
            Err(e) => assert!(matches!(
                e,
                PrimerError::NoStopCodon
                    | PrimerError::CodingRegionTooShort { .. }
                    | PrimerError::NoForwardPrimer { .. }
                    | PrimerError::NoReversePrimer { .. }
                    | PrimerError::NoPairFound
            )),
        }
    }

    #[test]
    fn pipeline_is_idempotent() {
        let cfg = PrimerConfig { strategy: PairStrategy::AllFeasiblePairs, ..PrimerConfig::default() };
        assert_eq!(design_primers(DEMO, &cfg), design_primers(DEMO, &cfg));
    }

    #[test]
    fn all_pairs_starts_with_first_feasible_pair() {
        let first = design_primers(DEMO, &PrimerConfig::default()).unwrap();
        let cfg = PrimerConfig { strategy: PairStrategy::AllFeasiblePairs, ..PrimerConfig::default() };
        let all = design_primers(DEMO, &cfg).unwrap();
        assert!(all.pairs.len() > 1);
        assert_eq!(all.pairs[0], first.pairs[0]);
        assert!(all.pairs.iter().all(|p| p.tm_difference() <= 4.0 + 1e-9));
    }

    #[test]
    fn narrow_window_reports_missing_forward_primer() {
        let err = design_primers(DEMO, &PrimerConfig::with_temps(80.0, 90.0)).unwrap_err();
        let ctx = err.context().unwrap();
        assert!(matches!(err, PrimerError::NoForwardPrimer { .. }));
        assert_eq!(ctx.codon, "ATG");
        assert_eq!(ctx.len(), 43);
    }

    #[test]
    fn early_failures_short_circuit() {
        let cfg = PrimerConfig::default();
        assert_eq!(design_primers(">x\nCCCGGGTTT", &cfg), Err(PrimerError::NoStartCodon));
        assert_eq!(design_primers(">x\nATGCCCCCCCCCCCCCCC", &cfg), Err(PrimerError::NoStopCodon));
        assert_eq!(
            design_primers(">x\nATGAAATAA", &cfg),
            Err(PrimerError::CodingRegionTooShort { start: 0, stop: 6 })
        );
    }
}

#[cfg(test)]
mod pipeline_proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn random_sequences_yield_result_or_named_failure(body in "[ACGT]{0,200}") {
            let raw = format!(">rand\n{body}");
            let cfg = PrimerConfig::default();
            let first = design_primers(&raw, &cfg);
            prop_assert_eq!(&first, &design_primers(&raw, &cfg));
            if let Ok(d) = first {
                for c in d.candidates.forward.iter().chain(d.candidates.reverse.iter()) {
                    prop_assert!((20..=23).contains(&c.len()));
                    prop_assert!(c.tm > 55.0 - 0.005 && c.tm < 62.0 + 0.005);
                }
                prop_assert_eq!(d.pairs.len(), 1);
            }
        }
    }
}
