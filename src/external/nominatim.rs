use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::Coordinate,
    error::{upstream_error, Error},
    external::Geocoder,
};

/// One candidate of a Nominatim `/search` answer. Coordinates come as strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchResult {
    fn coordinate(&self) -> Result<Coordinate, Error> {
        let lat = self.lat.trim().parse().map_err(|_| upstream_error())?;
        let lon = self.lon.trim().parse().map_err(|_| upstream_error())?;

        Ok(Coordinate::new(lat, lon))
    }
}

#[derive(Clone, Debug)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(config.http_client()?, config.nominatim_base_url.clone()))
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, Error> {
        let url = format!("{}/search", self.base_url);

        let res = self
            .client
            .get(url)
            .query(&[("format", "json")])
            .query(&[("q", address)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "geocoding request rejected");
            return Err(upstream_error());
        }

        let results: Vec<SearchResult> = res.json().await?;

        match results.first() {
            Some(result) => {
                let coordinate = result.coordinate()?;
                tracing::debug!(lat = coordinate.lat, lon = coordinate.lon, "geocoded address");
                Ok(Some(coordinate))
            }
            None => {
                tracing::info!("no geocoding candidates");
                Ok(None)
            }
        }
    }
}
