use game_types::{CompassDirection, GeoPoint};

pub const EARTH_RADIUS_MILES: f64 = 3958.8;
pub const MILES_TO_KM: f64 = 1.609344;

/// Normalization ceiling for proximity: roughly half the antipodal
/// great-circle distance, the farthest two points on Earth can be apart.
pub const MAX_DISTANCE_MILES: f64 = 12_450.0;

/// Great-circle (haversine) distance between two points, in miles.
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    EARTH_RADIUS_MILES * 2.0 * h.sqrt().asin()
}

/// Initial compass bearing of the great-circle path from `from` to `to`,
/// in degrees clockwise from true north, normalized into [0, 360).
///
/// Degenerate when the points coincide; returns 0 in that case.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Bucket a bearing into one of the eight compass octants.
///
/// Octants are 45 degrees wide and centered on the cardinal and diagonal
/// directions, half-open with the lower bound inclusive: N covers
/// [337.5, 360) and [0, 22.5), NE covers [22.5, 67.5), and so on.
pub fn compass_direction(bearing: f64) -> CompassDirection {
    const OCTANTS: [CompassDirection; 8] = [
        CompassDirection::N,
        CompassDirection::NE,
        CompassDirection::E,
        CompassDirection::SE,
        CompassDirection::S,
        CompassDirection::SW,
        CompassDirection::W,
        CompassDirection::NW,
    ];

    let sector = ((bearing.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
    OCTANTS[sector]
}

/// Normalized closeness in [0, 1]: 1 for an exact hit, 0 at or beyond
/// `max_distance_miles`.
pub fn proximity(distance_miles: f64, max_distance_miles: f64) -> f64 {
    1.0 - (distance_miles / max_distance_miles).min(1.0)
}
