//! Candidate primer enumeration around the start and stop codon.
//!
//! For an anchor codon at `pos`, windows start at every offset in
//! `pos - 20 .. pos` (the anchor itself is not an offset) and take lengths
//! 20 through 23. Offsets are visited in increasing order, lengths in
//! increasing order within an offset; that order decides which candidate
//! counts as "first" when pairing.
//!
//! A window is kept iff its melting temperature lies strictly inside the
//! configured range and it contains the anchor codon. Windows that would start
//! before the sequence or run past its end are skipped, so every candidate is
//! 20 to 23 nt long.
use crate::config::PrimerConfig;
use crate::error::{PrimerError, Result};
use crate::melting::{round_tm, tm};
use crate::primer::{
    Candidate, CandidateSet, CodingRegion, CodonContext, Direction, ANCHOR_SPAN, PRIMER_MAX_LEN,
    PRIMER_MIN_LEN, START_CODON,
};
use crate::seqio::Sequence;

/// Enumerate windows anchored at `anchor`, keeping those containing `codon`.
fn scan_anchor(sequence: &Sequence, anchor: usize, codon: &str, config: &PrimerConfig, dir: Direction) -> Result<Vec<Candidate>> {
    let seq = sequence.as_bytes();
    let mut out = Vec::new();
    let first = anchor.saturating_sub(ANCHOR_SPAN);
    for offset in first..anchor {
        for len in PRIMER_MIN_LEN..=PRIMER_MAX_LEN {
            let end = offset + len;
            if end > seq.len() {
                break;
            }
            let window = &seq[offset..end];
            let t = tm(window).map_err(|e| match e {
                // a window may start inside a multi-byte symbol; decode from the whole sequence
                PrimerError::MalformedSequence { symbol, position } => match sequence.char_at(offset + position) {
                    Some((start, c)) => PrimerError::MalformedSequence { symbol: Some(c), position: start },
                    None => PrimerError::MalformedSequence { symbol, position: offset + position },
                },
                other => other,
            })?;
            if !config.admits(t) || !contains(window, codon.as_bytes()) {
                continue;
            }
            log::trace!("{} candidate at {} len {} tm {:.2}", dir, offset, len, t);
            out.push(Candidate {
                sequence: String::from_utf8_lossy(window).into_owned(),
                position: offset,
                tm: round_tm(t),
            });
        }
    }
    Ok(out)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Forward candidates: windows before the start codon that contain `ATG`.
pub fn forward_candidates(seq: &Sequence, region: &CodingRegion, config: &PrimerConfig) -> Result<Vec<Candidate>> {
    scan_anchor(seq, region.start, START_CODON, config, Direction::Forward)
}

/// Reverse candidates: windows before the stop codon that contain that stop codon.
///
/// Sequences are on the template strand; reverse complementing happens at pairing.
pub fn reverse_candidates(seq: &Sequence, region: &CodingRegion, config: &PrimerConfig) -> Result<Vec<Candidate>> {
    scan_anchor(seq, region.stop_pos, region.stop_codon.as_str(), config, Direction::Reverse)
}

/// Run both passes.
///
/// Both lists are built before either is checked for emptiness; an empty
/// forward list is reported first.
pub fn generate_candidates(seq: &Sequence, region: &CodingRegion, config: &PrimerConfig) -> Result<CandidateSet> {
    let forward = forward_candidates(seq, region, config)?;
    let reverse = reverse_candidates(seq, region, config)?;
    log::debug!("candidates: forward={} reverse={}", forward.len(), reverse.len());
    if forward.is_empty() {
        return Err(PrimerError::NoForwardPrimer { context: CodonContext::around(seq.as_bytes(), region.start) });
    }
    if reverse.is_empty() {
        return Err(PrimerError::NoReversePrimer { context: CodonContext::around(seq.as_bytes(), region.stop_pos) });
    }
    Ok(CandidateSet { forward, reverse })
}
