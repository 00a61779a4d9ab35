use game_types::{Country, Game, GeoPoint, UserClientId};
use uuid::Uuid;

/// Build a country with just enough fields for scoring.
pub fn make_country(id: i32, name: &str, lat: f64, lon: f64) -> Country {
    Country {
        id,
        name: name.to_string(),
        iso2: None,
        iso3: None,
        status: Some("Member State".to_string()),
        continent: None,
        region: None,
        parent_id: None,
        geo_point: GeoPoint::new(lat, lon).unwrap(),
    }
}

pub fn make_client_id() -> UserClientId {
    Uuid::new_v4()
}

pub fn make_game(client: UserClientId, answer: &Country) -> Game {
    Game::new(client, answer.id)
}
