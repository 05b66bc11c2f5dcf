mod handlers;

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::{
    api::{DynAPI, API},
    config::Config,
    error::{unexpected_error, Error},
    server::handlers::{pages, state, trips},
    view::{self, PageRenderer, SharedView},
};

pub type SharedRenderer = Arc<PageRenderer>;

pub fn app(api: DynAPI, view: SharedView, renderer: PageRenderer) -> Router {
    Router::new()
        .route("/", get(pages::show).post(pages::submit))
        .route("/trips", post(trips::create))
        .route("/state", get(state::find))
        .layer(Extension(api))
        .layer(Extension(view))
        .layer(Extension(Arc::new(renderer) as SharedRenderer))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, config: &Config) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let renderer = PageRenderer::new(config.tile_url.clone())?;

    let app = app(api, view::shared(), renderer);

    tracing::info!("listening on {}", config.bind_addr);

    axum::Server::try_bind(&config.bind_addr)
        .map_err(|err| {
            tracing::error!(%err, "cannot bind");
            unexpected_error()
        })?
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!(%err, "server stopped");
            unexpected_error()
        })
}
