use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::Coordinate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Coordinate>,
    pub total_distance_meters: f64,
}

impl Route {
    pub fn new(points: Vec<Coordinate>, total_distance_meters: f64) -> Self {
        Route {
            points,
            total_distance_meters,
        }
    }

    /// Builds a route from a lon/lat line string as returned by the routing engine.
    pub fn from_line_string(line: LineString<f64>, total_distance_meters: f64) -> Self {
        let points = line.points().map(Coordinate::from).collect();
        Route::new(points, total_distance_meters)
    }

    pub fn origin(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }
}
