//! Rendering of results and failures for the command line.
//!
//! Text output uses fixed sentences with Python-style float formatting. Tables go
//! through polars so they can be pretty-printed or written as CSV, and the
//! JSON document is plain `serde_json`.
use polars::prelude::*;
use serde::Serialize;

use crate::config::PrimerConfig;
use crate::error::PrimerError;
use crate::melting::gc_content;
use crate::primer::{CandidateSet, CodonContext, Direction, PrimerDesign, PrimerPair};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Format a temperature the way Python prints a float (`60.0`, `58.46`).
pub fn fmt_tm(t: f64) -> String {
    if t.fract() == 0.0 { format!("{:.1}", t) } else { format!("{}", t) }
}

/// The two "suitable primer" lines for a pair.
pub fn render_pair(pair: &PrimerPair) -> String {
    format!(
        "A suitable forward primer is {}. It has a melting temperature of {}°C.\n\
         A suitable reverse primer is {}. It has a melting temperature of {}°C.",
        pair.forward.sequence,
        fmt_tm(pair.forward.tm),
        pair.reverse.sequence,
        fmt_tm(pair.reverse.tm),
    )
}

/// All selected pairs, blank line between pairs.
pub fn render_design(design: &PrimerDesign) -> String {
    design.pairs.iter().map(render_pair).collect::<Vec<_>>().join("\n\n")
}

/// One line of sequence with the codon emphasized.
///
/// With `color` the codon is wrapped in ANSI bold, otherwise in brackets.
pub fn render_context(ctx: &CodonContext, color: bool) -> String {
    if color {
        format!("{}{}{}{}{}", ctx.upstream, BOLD, ctx.codon, RESET, ctx.downstream)
    } else {
        format!("{}[{}]{}", ctx.upstream, ctx.codon, ctx.downstream)
    }
}

/// The user-facing message for a failed run, with codon context where attached.
pub fn render_error(err: &PrimerError, color: bool) -> String {
    let label = match err {
        PrimerError::NoForwardPrimer { .. } => "start",
        PrimerError::NoReversePrimer { .. } => "stop",
        _ => return err.to_string(),
    };
    match err.context() {
        Some(ctx) => format!("{}\nRegion around the {} codon: \n{}", err, label, render_context(ctx, color)),
        None => err.to_string(),
    }
}

/// Candidate table: one row per candidate, forward first.
pub fn candidates_frame(set: &CandidateSet) -> PolarsResult<DataFrame> {
    let rows: Vec<_> = set
        .forward
        .iter()
        .map(|c| (Direction::Forward, c))
        .chain(set.reverse.iter().map(|c| (Direction::Reverse, c)))
        .collect();
    df!(
        "direction" => rows.iter().map(|(d, _)| d.to_string()).collect::<Vec<_>>(),
        "position"  => rows.iter().map(|(_, c)| c.position as u64).collect::<Vec<_>>(),
        "length"    => rows.iter().map(|(_, c)| c.len() as u64).collect::<Vec<_>>(),
        "sequence"  => rows.iter().map(|(_, c)| c.sequence.clone()).collect::<Vec<_>>(),
        "gc"        => rows.iter().map(|(_, c)| gc_content(c.sequence.as_bytes()).ok()).collect::<Vec<_>>(),
        "tm"        => rows.iter().map(|(_, c)| c.tm).collect::<Vec<_>>(),
    )
}

/// Write a frame as CSV with header.
pub fn write_csv<W: std::io::Write>(w: W, df: &mut DataFrame) -> PolarsResult<()> {
    CsvWriter::new(w).include_header(true).finish(df)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    header: &'a str,
    config: &'a PrimerConfig,
    #[serde(flatten)]
    design: &'a PrimerDesign,
}

/// Pretty JSON document describing the run.
pub fn to_json(header: &str, config: &PrimerConfig, design: &PrimerDesign) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { version: crate::VERSION, header, config, design })
}
