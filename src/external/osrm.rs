use async_trait::async_trait;
use geo_types::LineString;
use serde::Deserialize;

use crate::{
    config::Config,
    entities::{Coordinate, Route},
    error::{route_not_found, upstream_error, Error},
    external::RoutingEngine,
};

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/driving/";

#[derive(Debug, Deserialize)]
struct Response {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteCandidate>,
}

#[derive(Debug, Deserialize)]
struct RouteCandidate {
    /// Meters
    distance: f64,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Clone, Debug)]
pub struct OsrmClient {
    client: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(config.http_client()?, config.osrm_base_url.clone()))
    }

    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let mut url = self.base_url.clone();
        url.push_str(OSRM_ROUTE_API_PATH);

        let waypoints: Vec<String> = waypoints.iter().copied().map(String::from).collect();
        url.push_str(&waypoints.join(";"));

        url
    }
}

#[async_trait]
impl RoutingEngine for OsrmClient {
    #[tracing::instrument(skip(self))]
    async fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, Error> {
        let res = self
            .client
            .get(self.route_url(&[origin, destination]))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = res.status();
        // OSRM reports NoRoute with a 400 and a JSON body
        if status.is_server_error() {
            tracing::warn!(%status, "routing engine failed");
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        if data.code != "Ok" {
            tracing::info!(code = %data.code, message = ?data.message, "no route");
            return match data.code.as_str() {
                "NoRoute" | "NoSegment" => Err(route_not_found()),
                _ => Err(upstream_error()),
            };
        }

        let candidate = data.routes.into_iter().next().ok_or_else(route_not_found)?;
        if candidate.geometry.coordinates.is_empty() {
            return Err(upstream_error());
        }

        let line = LineString::from(candidate.geometry.coordinates);
        let route = Route::from_line_string(line, candidate.distance);
        tracing::debug!(
            points = route.points.len(),
            meters = route.total_distance_meters,
            "route found"
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoints_are_lon_lat_pairs() {
        let client = OsrmClient::new(reqwest::Client::new(), "http://osrm.local");
        let url = client.route_url(&[
            Coordinate::new(-6.1754, 106.8272),
            Coordinate::new(-6.2443, 106.8002),
        ]);
        assert_eq!(
            url,
            "http://osrm.local/route/v1/driving/106.8272,-6.1754;106.8002,-6.2443"
        );
    }

    #[test]
    fn parses_no_route_bodies() {
        let json = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let data: Response = serde_json::from_str(json).unwrap();
        assert_eq!(data.code, "NoRoute");
        assert!(data.routes.is_empty());
    }
}
