//! Ranking tuning parameters.
//!
//! Constants here carry the default weights; `SearchConfig` allows overriding
//! them at startup without recompiling.

/// Fixed bonus awarded for each query token that appears in a document's text
/// as a whole word. Deliberately large relative to typical TF-IDF values so
/// that literal matches dominate for short queries.
pub const EXACT_MATCH_WEIGHT: f64 = 5.0;

/// Runtime ranking configuration, shared across requests.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Per-token whole-word match bonus. See [`EXACT_MATCH_WEIGHT`].
    pub exact_match_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exact_match_weight: EXACT_MATCH_WEIGHT,
        }
    }
}

impl SearchConfig {
    /// Builds a config from the environment, falling back to defaults.
    ///
    /// Recognized variables:
    /// - `EXACT_MATCH_WEIGHT`: overrides the whole-word match bonus.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("EXACT_MATCH_WEIGHT") {
            match raw.parse::<f64>() {
                Ok(weight) => config.exact_match_weight = weight,
                Err(err) => {
                    tracing::warn!("Ignoring invalid EXACT_MATCH_WEIGHT {:?}: {}", raw, err);
                }
            }
        }
        config
    }
}
