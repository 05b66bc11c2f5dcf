use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for geo_types::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<geo_types::Point<f64>> for Coordinate {
    fn from(point: geo_types::Point<f64>) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        format!("{},{}", coordinate.lon, coordinate.lat)
    }
}
