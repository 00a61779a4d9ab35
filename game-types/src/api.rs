use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::country::{Country, CountryId};
use crate::game::{GameId, GameStatus, GuessId, UserClientId};
use crate::geo::CompassDirection;
use crate::stats::StatsSummary;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserClientRead {
    pub uuid: UserClientId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameCreate {
    pub user_client_uuid: UserClientId,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessCreate {
    pub guessed_country_id: CountryId,
}

/// A guess as the API serves it: the stored base fields plus the outcome
/// fields recomputed from the guessed and answer points at read time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessItem {
    pub id: GuessId,
    pub guessed_country_id: CountryId,
    pub guessed_country: Country,
    pub index: u32,
    pub is_correct: bool,
    pub distance_to_answer_miles: f64,
    pub distance_to_answer_km: f64,
    pub bearing_to_answer: f64,
    pub compass_direction_to_answer: CompassDirection,
    pub proximity_prop: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameRead {
    pub id: GameId,
    pub user_client_id: UserClientId,
    pub answer_country_id: CountryId,
    pub status: GameStatus,
    pub answer_country: Country,
    pub guesses: Vec<GuessItem>,
    pub created_at: DateTime<Utc>,
}

/// Stats payload. `win_rate` is null for clients with no completed games
/// instead of a bogus number.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatsRead {
    pub num_played: u32,
    pub num_won: u32,
    pub win_rate: Option<f64>,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guess_distribution: BTreeMap<u32, u32>,
}

impl From<StatsSummary> for StatsRead {
    fn from(summary: StatsSummary) -> Self {
        let win_rate = summary.win_rate().ok();
        StatsRead {
            num_played: summary.num_played,
            num_won: summary.num_won,
            win_rate,
            current_streak: summary.current_streak,
            max_streak: summary.max_streak,
            guess_distribution: summary.guess_distribution,
        }
    }
}
