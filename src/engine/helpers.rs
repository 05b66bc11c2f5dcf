use super::Engine;

use crate::{
    entities::Coordinate,
    error::{geocode_not_found, geocode_unavailable, Error},
};

impl Engine {
    /// Geocodes one address. A failed lookup ends the booking the same way an
    /// unknown address does, but only the latter is worth telling the user.
    #[tracing::instrument(skip(self))]
    pub(super) async fn locate(&self, address: &str) -> Result<Coordinate, Error> {
        match self.geocoder.geocode(address).await {
            Ok(Some(coordinate)) => Ok(coordinate),
            Ok(None) => Err(geocode_not_found(address)),
            Err(err) => {
                tracing::error!(%err, "error fetching geocode");
                Err(geocode_unavailable())
            }
        }
    }
}
