use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::country::CountryId;
use crate::game::{GameId, GameStatus, UserClientId};

/// Every failure the core can signal. All variants are deterministic
/// pure-function failures; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("game {game_id} is not in progress (status: {status:?})")]
    GameNotActive { game_id: GameId, status: GameStatus },

    #[error("game {game_id} already has the maximum of {max} guesses")]
    GuessLimitReached { game_id: GameId, max: u32 },

    #[error("country {country_id} could not be resolved")]
    InvalidCountryReference { country_id: CountryId },

    #[error("game {game_id} not found")]
    GameNotFound { game_id: GameId },

    #[error("user client {uuid} not found")]
    UserClientNotFound { uuid: UserClientId },

    #[error("win rate is undefined with zero completed games")]
    NoGamesPlayed,

    #[error("coordinates out of range: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}
