//! Terminal failure conditions of a primer design run.
//!
//! Every variant ends the run. None are retried or recovered internally; the
//! binary prints the message (plus the codon context where one is attached)
//! and exits.
use crate::primer::CodonContext;

/// Errors returned by the primer design pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PrimerError {
    /// The sequence contains no `ATG`.
    #[error("No start codon could be found.")]
    NoStartCodon,
    /// No in-frame `TAG`, `TGA` or `TAA` follows the start codon.
    #[error("No stop codon could be found.")]
    NoStopCodon,
    /// Start and stop codon are 11 bases or fewer apart.
    #[error("The coding sequence is too short.")]
    CodingRegionTooShort { start: usize, stop: usize },
    /// No forward window passed the temperature and start codon filters.
    #[error("No forward primers could be found, you may alter the temperature settings.")]
    NoForwardPrimer { context: CodonContext },
    /// No reverse window passed the temperature and stop codon filters.
    #[error("No reverse primers could be found, you may alter the temperature settings.")]
    NoReversePrimer { context: CodonContext },
    /// No forward candidate lies within the tolerance of the examined reverse candidate(s).
    #[error("No suitable primer pair could be found")]
    NoPairFound,
    /// A scanned window holds a symbol outside `A`, `C`, `G`, `T` (or is empty).
    #[error("Malformed sequence: unexpected symbol {} at position {position}.", fmt_symbol(.symbol))]
    MalformedSequence { symbol: Option<char>, position: usize },
}

impl PrimerError {
    /// The codon neighbourhood attached to primer-not-found failures.
    pub fn context(&self) -> Option<&CodonContext> {
        match self {
            PrimerError::NoForwardPrimer { context } | PrimerError::NoReversePrimer { context } => Some(context),
            _ => None,
        }
    }
}

fn fmt_symbol(symbol: &Option<char>) -> String {
    match symbol {
        Some(c) => format!("'{}'", c),
        None => "<empty window>".to_string(),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrimerError>;
