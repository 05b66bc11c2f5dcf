use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, TripAPI};
use crate::entities::{AddressRequest, Trip, TripSummary};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    origin: String,
    #[serde(default)]
    destination: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    pub trip: Trip,
    pub summary: TripSummary,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<CreateResponse>, Error> {
    let request = AddressRequest::new(&params.origin, &params.destination)?;
    let trip = api.resolve_trip(request).await?;
    let summary = trip.summary();

    Ok(CreateResponse { trip, summary }.into())
}
