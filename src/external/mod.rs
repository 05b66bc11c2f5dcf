pub mod nominatim;
pub mod osrm;

use async_trait::async_trait;

use crate::entities::{Coordinate, Route};
use crate::error::Error;

pub use nominatim::NominatimClient;
pub use osrm::OsrmClient;

#[async_trait]
pub trait Geocoder {
    /// Resolves a free-text address. `Ok(None)` when the service knows no
    /// candidate for it.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, Error>;
}

#[async_trait]
pub trait RoutingEngine {
    async fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, Error>;
}
