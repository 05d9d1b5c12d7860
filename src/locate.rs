//! Coding-region location: first `ATG`, then the first in-frame terminator.
//!
//! # Examples
//! ```
//! use primerpair::locate::locate_coding_region;
//! use primerpair::seqio::normalize;
//! let seq = normalize("h\nCCATGAAAAAAAAAAAATAAGG");
//! let r = locate_coding_region(&seq).unwrap();
//! assert_eq!((r.start, r.stop_pos), (2, 17));
//! ```
use crate::error::{PrimerError, Result};
use crate::primer::{CodingRegion, StopCodon, START_CODON};
use crate::seqio::Sequence;

/// Start and stop must be more than this many bases apart.
///
/// The shortest described proteins are 11 amino acids long.
pub const MIN_CODING_SPAN: usize = 11;

/// Index of the first start codon.
pub fn locate_start(seq: &Sequence) -> Result<usize> {
    seq.as_str().find(START_CODON).ok_or(PrimerError::NoStartCodon)
}

/// First in-frame stop codon at or after `start`.
///
/// Positions `start, start + 3, …` are tested up to and including the sequence
/// length. Windows that run past the end are shorter than a codon and never match.
pub fn locate_stop(seq: &Sequence, start: usize) -> Result<(usize, StopCodon)> {
    let bytes = seq.as_bytes();
    (start..=bytes.len())
        .step_by(3)
        .find_map(|i| {
            let end = (i + 3).min(bytes.len());
            StopCodon::from_window(&bytes[i..end]).map(|c| (i, c))
        })
        .ok_or(PrimerError::NoStopCodon)
}

/// Locate the coding region and apply the minimum length policy.
pub fn locate_coding_region(seq: &Sequence) -> Result<CodingRegion> {
    let start = locate_start(seq)?;
    let (stop_pos, stop_codon) = locate_stop(seq, start)?;
    if stop_pos - start <= MIN_CODING_SPAN {
        return Err(PrimerError::CodingRegionTooShort { start, stop: stop_pos });
    }
    log::debug!("coding region: start={} stop={} codon={}", start, stop_pos, stop_codon);
    Ok(CodingRegion { start, stop_pos, stop_codon })
}
