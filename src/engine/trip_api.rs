use super::Engine;

use async_trait::async_trait;

use crate::{
    api::TripAPI,
    entities::{AddressRequest, Trip},
    error::Error,
};

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_trip(&self, request: AddressRequest) -> Result<Trip, Error> {
        let origin = self.locate(&request.origin).await?;
        let destination = self.locate(&request.destination).await?;

        let route = self.router.route(origin, destination).await?;
        let trip = Trip::new(request, origin, destination, route);

        tracing::info!(
            id = %trip.id,
            distance_km = trip.metrics.distance_km,
            price_idr = trip.metrics.price_idr,
            "trip resolved"
        );

        Ok(trip)
    }
}
