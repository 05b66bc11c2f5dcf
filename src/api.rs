use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{AddressRequest, Trip};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    /// Geocodes both addresses, routes between them and prices the result.
    async fn resolve_trip(&self, request: AddressRequest) -> Result<Trip, Error>;
}

pub trait API: TripAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
