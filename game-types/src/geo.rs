use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::GameError;

/// A point on the globe in decimal degrees.
///
/// Latitude is positive north, longitude positive east. Passed by value
/// everywhere; the scoring math never mutates one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Build a point, rejecting coordinates outside [-90, 90] x [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, GameError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(GameError::InvalidCoordinates { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// One of the eight 45-degree sectors of the compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(48.8566, 2.3522).is_ok());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());

        assert!(matches!(
            GeoPoint::new(90.1, 0.0),
            Err(GameError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.5),
            Err(GameError::InvalidCoordinates { .. })
        ));
    }
}
