//! Run configuration passed explicitly into [`crate::design_primers`].
use serde::Serialize;

use crate::select::{PairStrategy, MAX_TM_DIFFERENCE};

/// Default lower melting temperature bound (°C, exclusive).
pub const DEFAULT_MIN_TEMP: f64 = 55.0;

/// Default upper melting temperature bound (°C, exclusive).
pub const DEFAULT_MAX_TEMP: f64 = 62.0;

/// Thresholds and policy for one primer design run.
///
/// `min_temp < max_temp` is not enforced; an inverted window simply admits no
/// candidates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PrimerConfig {
    /// Candidates must melt strictly above this.
    pub min_temp: f64,
    /// Candidates must melt strictly below this.
    pub max_temp: f64,
    /// Largest allowed forward/reverse Tm difference, inclusive.
    pub max_tm_difference: f64,
    pub strategy: PairStrategy,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            min_temp: DEFAULT_MIN_TEMP,
            max_temp: DEFAULT_MAX_TEMP,
            max_tm_difference: MAX_TM_DIFFERENCE,
            strategy: PairStrategy::default(),
        }
    }
}

impl PrimerConfig {
    /// Config with the given temperature window and default pairing policy.
    pub fn with_temps(min_temp: f64, max_temp: f64) -> Self {
        Self { min_temp, max_temp, ..Self::default() }
    }

    /// Whether `tm` lies strictly inside the temperature window.
    #[inline]
    pub fn admits(&self, tm: f64) -> bool { tm > self.min_temp && tm < self.max_temp }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let c = PrimerConfig::default();
        assert_eq!((c.min_temp, c.max_temp, c.max_tm_difference), (55.0, 62.0, 4.0));
        assert_eq!(c.strategy, PairStrategy::FirstFeasiblePair);
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let c = PrimerConfig::with_temps(55.0, 62.0);
        assert!(!c.admits(55.0));
        assert!(c.admits(55.01));
        assert!(!c.admits(62.0));
    }

    #[test]
    fn inverted_window_admits_nothing() {
        let c = PrimerConfig::with_temps(62.0, 55.0);
        assert!(!c.admits(58.0));
    }
}
