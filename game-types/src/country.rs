use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geo::GeoPoint;

pub type CountryId = i32;

/// A guessable country, loaded once at startup and never mutated.
///
/// `geo_point` is the representative point ("centroid") used for scoring.
/// `parent_id` links territories to their sovereign country; the scoring
/// logic never traverses it, it is carried for API compatibility only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub status: Option<String>,
    pub continent: Option<String>,
    pub region: Option<String>,
    pub parent_id: Option<CountryId>,
    pub geo_point: GeoPoint,
}
