use game_types::{Country, GeoPoint, Guess, GuessItem, GuessOutcome};

use crate::geodesy;

/// Compute the derived feedback for a guessed point against the answer
/// point. Pure: the same two points always produce the same outcome, which
/// is why outcomes are recomputed on read instead of stored.
pub fn compute_guess_outcome(guessed_point: GeoPoint, answer_point: GeoPoint) -> GuessOutcome {
    let distance = geodesy::distance_miles(guessed_point, answer_point);
    let bearing = geodesy::initial_bearing(guessed_point, answer_point);

    GuessOutcome {
        distance_to_answer_miles: distance,
        distance_to_answer_km: distance * geodesy::MILES_TO_KM,
        bearing_to_answer: bearing,
        compass_direction_to_answer: geodesy::compass_direction(bearing),
        proximity_prop: geodesy::proximity(distance, geodesy::MAX_DISTANCE_MILES),
    }
}

/// Assemble the API view of a stored guess, recomputing the derived fields
/// from the two countries' points.
pub fn render_guess(guess: &Guess, guessed: &Country, answer: &Country) -> GuessItem {
    let outcome = compute_guess_outcome(guessed.geo_point, answer.geo_point);

    GuessItem {
        id: guess.id,
        guessed_country_id: guess.guessed_country_id,
        guessed_country: guessed.clone(),
        index: guess.index,
        is_correct: guess.guessed_country_id == answer.id,
        distance_to_answer_miles: outcome.distance_to_answer_miles,
        distance_to_answer_km: outcome.distance_to_answer_km,
        bearing_to_answer: outcome.bearing_to_answer,
        compass_direction_to_answer: outcome.compass_direction_to_answer,
        proximity_prop: outcome.proximity_prop,
    }
}
