use axum::extract::{Extension, Form};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::api::{DynAPI, TripAPI};
use crate::entities::{AddressForm, AddressRequest, FieldErrors};
use crate::error::Error;
use crate::server::SharedRenderer;
use crate::view::SharedView;

pub async fn show(
    Extension(view): Extension<SharedView>,
    Extension(renderer): Extension<SharedRenderer>,
) -> Result<Html<String>, Error> {
    let mut view = view.write().await;
    let alert = view.take_alert();
    let html = renderer.render(
        view.state(),
        view.form(),
        &FieldErrors::default(),
        alert.as_deref(),
    )?;

    Ok(Html(html))
}

/// Validates the booking form. Valid submissions switch the page to loading
/// and resolve the trip in the background.
pub async fn submit(
    Extension(api): Extension<DynAPI>,
    Extension(view): Extension<SharedView>,
    Extension(renderer): Extension<SharedRenderer>,
    Form(form): Form<AddressForm>,
) -> Result<Response, Error> {
    let request = match AddressRequest::try_from(&form) {
        Ok(request) => request,
        Err(err) => {
            let state = view.read().await.state().clone();
            let html = renderer.render(&state, &form, &err.fields, None)?;

            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let submission = view.write().await.begin(&request);
    tracing::info!(?submission, "booking submitted");

    tokio::spawn(async move {
        let outcome = api.resolve_trip(request).await;
        view.write().await.complete(submission, outcome);
    });

    Ok(Redirect::to("/").into_response())
}
