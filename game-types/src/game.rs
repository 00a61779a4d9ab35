use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::country::CountryId;
use crate::geo::CompassDirection;

pub type GameId = Uuid;
pub type GuessId = Uuid;
pub type UserClientId = Uuid;

/// Maximum number of guesses a game allows before it is lost.
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    Abandoned,
}

impl GameStatus {
    /// A game transitions out of InProgress exactly once; every other
    /// status is terminal.
    pub fn is_terminal(&self) -> bool {
        match self {
            GameStatus::InProgress => false,
            GameStatus::Won | GameStatus::Lost | GameStatus::Abandoned => true,
        }
    }
}

/// An anonymous player, identified only by a generated token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserClient {
    pub uuid: UserClientId,
    pub created_at: DateTime<Utc>,
}

impl UserClient {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

impl Default for UserClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One round of the guessing game.
///
/// Guesses are kept in insertion order, which is also attempt order; the
/// k-th guess carries index k-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub user_client_id: UserClientId,
    pub answer_country_id: CountryId,
    pub status: GameStatus,
    pub guesses: Vec<Guess>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(user_client_id: UserClientId, answer_country_id: CountryId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_client_id,
            answer_country_id,
            status: GameStatus::InProgress,
            guesses: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// A stored guess. Only base fields live here; everything derived from the
/// guessed and answer points (distance, bearing, compass direction,
/// proximity) is recomputed on read so it can never drift from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Guess {
    pub id: GuessId,
    pub game_id: GameId,
    pub guessed_country_id: CountryId,
    pub index: u32,
    pub created_at: DateTime<Utc>,
}

/// The derived feedback for a single guess.
///
/// `is_correct` is intentionally absent: it is an identifier comparison the
/// caller makes, not a function of the two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessOutcome {
    pub distance_to_answer_miles: f64,
    pub distance_to_answer_km: f64,
    pub bearing_to_answer: f64,
    pub compass_direction_to_answer: CompassDirection,
    pub proximity_prop: f64,
}
