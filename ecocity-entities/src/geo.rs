use std::fmt;

use thiserror::Error;

/// A validated geographical position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error)]
#[error("Coordinates out of range: ({lat}, {lng})")]
pub struct InvalidMapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, InvalidMapPoint> {
        if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
            return Err(InvalidMapPoint { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_coordinates() {
        let pos = MapPoint::try_from_lat_lng_deg(-22.9, -43.2).unwrap();
        assert_eq!(-22.9, pos.lat());
        assert_eq!(-43.2, pos.lng());
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(91.0, 0.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -181.0).is_err());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_err());
    }
}
