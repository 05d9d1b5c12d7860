//! Input handling: turn FASTA-like text into one normalized [`Sequence`].
//!
//! ### Design
//! - The first line is the **header** and is never interpreted by the core.
//! - Everything after the first `\n` is the **body**: uppercased, with all line
//!   breaks (`\n`, `\r`) removed.
//! - No alphabet validation happens here. Foreign symbols surface later as
//!   [`PrimerError::MalformedSequence`](crate::PrimerError::MalformedSequence)
//!   when a primer window touches them.
//!
//! ### Errors
//! Only [`read_record`] touches the filesystem; IO errors are bubbled via
//! `anyhow::Result` with the path attached.
//!
//! ### Example
//! ```
//! use primerpair::seqio;
//! let rec = seqio::parse_record(">gene1\natgc\nGGTA\n");
//! assert_eq!(rec.header, "gene1");
//! assert_eq!(rec.sequence.as_str(), "ATGCGGTA");
//! ```
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// An uppercase nucleotide string without line breaks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str { &self.0 }

    pub fn as_bytes(&self) -> &[u8] { self.0.as_bytes() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The symbol covering byte `pos`, with the byte index where it starts.
    pub fn char_at(&self, pos: usize) -> Option<(usize, char)> {
        self.0
            .char_indices()
            .take_while(|(i, _)| *i <= pos)
            .last()
            .filter(|(i, c)| pos < i + c.len_utf8())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// A header line plus its normalized sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Header text with a leading `>` and surrounding whitespace removed.
    pub header: String,
    pub sequence: Sequence,
}

/// Split raw text into header and body.
fn split_header(raw: &str) -> (&str, &str) {
    match raw.find('\n') {
        Some(i) => (&raw[..i], &raw[i..]),
        None => (raw, ""),
    }
}

/// Normalize raw file contents into the sequence used by the core.
///
/// Input without a line break is all header and yields an empty sequence.
pub fn normalize(raw: &str) -> Sequence {
    let (_, body) = split_header(raw);
    Sequence(body.to_uppercase().chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}

/// Like [`normalize`] but also keeps the header for display.
pub fn parse_record(raw: &str) -> Record {
    let (header, _) = split_header(raw);
    let header = header.trim();
    Record {
        header: header.strip_prefix('>').unwrap_or(header).trim().to_string(),
        sequence: normalize(raw),
    }
}

/// Read and normalize a sequence file.
pub fn read_record<P: AsRef<Path>>(path: P) -> Result<Record> {
    let p = path.as_ref();
    let content = std::fs::read_to_string(p)
        .with_context(|| format!("failed to read sequence file {}", p.display()))?;
    let rec = parse_record(&content);
    log::debug!("read {}: header={:?} length={}", p.display(), rec.header, rec.sequence.len());
    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_dropped_and_body_joined() {
        let s = normalize(">hdr ATG\nacgt\nTTGA\n");
        assert_eq!(s.as_str(), "ACGTTTGA");
    }

    #[test]
    fn carriage_returns_are_removed() {
        let s = normalize(">x\r\nac\r\ngt\r\n");
        assert_eq!(s.as_str(), "ACGT");
    }

    #[test]
    fn header_only_yields_empty_sequence() {
        assert!(normalize(">only a header").is_empty());
        assert!(normalize("").is_empty());
    }

    #[test]
    fn foreign_symbols_pass_through() {
        assert_eq!(normalize("h\nacnn-t").as_str(), "ACNN-T");
    }

    #[test]
    fn char_at_finds_multi_byte_symbols() {
        let s = normalize("h\nAéC");
        assert_eq!(s.char_at(0), Some((0, 'A')));
        assert_eq!(s.char_at(2), Some((1, 'É')));
        assert_eq!(s.char_at(3), Some((3, 'C')));
        assert_eq!(s.char_at(4), None);
    }

    #[test]
    fn record_header_strips_marker() {
        let r = parse_record(">  my gene \nATG");
        assert_eq!(r.header, "my gene");
        assert_eq!(r.sequence.as_str(), "ATG");
    }

    #[test]
    fn read_record_reports_missing_path() {
        let err = read_record("/definitely/not/here.fa").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.fa"));
    }
}
