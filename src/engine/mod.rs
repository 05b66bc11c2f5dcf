mod helpers;
mod trip_api;

use std::sync::Arc;

use crate::{
    api::API,
    config::Config,
    error::Error,
    external::{Geocoder, NominatimClient, OsrmClient, RoutingEngine},
};

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynRoutingEngine = Arc<dyn RoutingEngine + Send + Sync>;

pub struct Engine {
    geocoder: DynGeocoder,
    router: DynRoutingEngine,
}

impl Engine {
    pub fn new(geocoder: DynGeocoder, router: DynRoutingEngine) -> Self {
        Self { geocoder, router }
    }

    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let geocoder = NominatimClient::from_config(config)?;
        let router = OsrmClient::from_config(config)?;

        tracing::info!(
            nominatim = %config.nominatim_base_url,
            osrm = %config.osrm_base_url,
            "engine ready"
        );

        Ok(Self::new(Arc::new(geocoder), Arc::new(router)))
    }
}

impl API for Engine {}
