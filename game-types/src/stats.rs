use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::GameError;
use crate::game::MAX_GUESSES;

/// Lifetime statistics for one client, recomputed on demand from their
/// game history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatsSummary {
    pub num_played: u32,
    pub num_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Dense histogram: every guess count 1..=MAX_GUESSES is present, zero
    /// or not.
    pub guess_distribution: BTreeMap<u32, u32>,
}

impl StatsSummary {
    pub fn empty() -> Self {
        Self {
            num_played: 0,
            num_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: (1..=MAX_GUESSES as u32).map(|n| (n, 0)).collect(),
        }
    }

    /// Fraction of completed games that were won.
    ///
    /// Signals `NoGamesPlayed` rather than dividing by zero when the client
    /// has no completed games; callers decide how to surface that.
    pub fn win_rate(&self) -> Result<f64, GameError> {
        if self.num_played == 0 {
            return Err(GameError::NoGamesPlayed);
        }
        Ok(f64::from(self.num_won) / f64::from(self.num_played))
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self::empty()
    }
}
