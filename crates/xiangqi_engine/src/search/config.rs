//! Search settings

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a search runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchMode {
    /// One negamax pass to a constant depth
    FixedDepth { depth: u8 },
    /// Iterative deepening until the budget runs out
    FixedTime { millis: u64 },
}

impl SearchMode {
    pub fn budget(&self) -> Option<Duration> {
        match self {
            SearchMode::FixedDepth { .. } => None,
            SearchMode::FixedTime { millis } => Some(Duration::from_millis(*millis)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Deepest iteration a fixed-time search may start
    pub max_depth: u8,
    pub quiescence: bool,
    /// Plies of capture-only extension below the horizon
    pub quiescence_depth: u8,
    pub null_move: bool,
    pub null_move_reduction: u8,
    pub tt_entries: usize,
    pub use_book: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::FixedDepth { depth: 4 },
            max_depth: MAX_DEPTH,
            quiescence: true,
            quiescence_depth: MAX_QUIESCENCE_DEPTH,
            null_move: true,
            null_move_reduction: NULL_MOVE_REDUCTION,
            tt_entries: DEFAULT_TT_ENTRIES,
            use_book: true,
        }
    }
}

impl SearchConfig {
    pub fn fixed_depth(depth: u8) -> Self {
        Self {
            mode: SearchMode::FixedDepth { depth },
            ..Self::default()
        }
    }

    pub fn fixed_time(budget: Duration) -> Self {
        Self {
            mode: SearchMode::FixedTime {
                millis: budget.as_millis() as u64,
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_round_trip() {
        let config = SearchConfig::fixed_time(Duration::from_millis(1500));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"fixed_time\""));
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: SearchConfig = serde_json::from_str(r#"{"null_move": false}"#).unwrap();
        assert!(!parsed.null_move);
        assert_eq!(parsed.quiescence_depth, MAX_QUIESCENCE_DEPTH);
        assert_eq!(parsed.mode, SearchMode::FixedDepth { depth: 4 });
    }

    #[test]
    fn test_budget() {
        assert_eq!(SearchMode::FixedDepth { depth: 3 }.budget(), None);
        assert_eq!(
            SearchMode::FixedTime { millis: 250 }.budget(),
            Some(Duration::from_millis(250))
        );
    }
}
