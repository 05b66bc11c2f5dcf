use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{AddressRequest, Coordinate, Route, TripMetrics, TripSummary};

/// Outcome of one successful booking lookup. Route and metrics are only ever
/// created together.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub request: AddressRequest,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub route: Route,
    pub metrics: TripMetrics,
    pub resolved_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(
        request: AddressRequest,
        origin: Coordinate,
        destination: Coordinate,
        route: Route,
    ) -> Self {
        let metrics = TripMetrics::from_distance(route.total_distance_meters);

        Self {
            id: Uuid::new_v4(),
            request,
            origin,
            destination,
            route,
            metrics,
            resolved_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> TripSummary {
        self.metrics.summary()
    }
}
