use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    entities::{AddressForm, FieldErrors},
    error::{unexpected_error, Error},
    view::UiState,
};

const PAGE_TEMPLATE: &str = "page.html";

/// Map center when nothing else is known (Jakarta).
pub const DEFAULT_CENTER: [f64; 2] = [-6.200000, 106.816666];
pub const DEFAULT_ZOOM: u8 = 13;
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Serialize)]
struct MapView<'a> {
    center: [f64; 2],
    zoom: u8,
    tile_url: &'a str,
    attribution: &'static str,
    /// `[lat, lon]` pairs, origin first.
    route: Option<Vec<[f64; 2]>>,
}

#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
    tile_url: String,
}

impl PageRenderer {
    pub fn new(tile_url: impl Into<String>) -> Result<Self, Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))
            .map_err(|err| {
                tracing::error!(%err, "page template does not compile");
                unexpected_error()
            })?;

        Ok(Self {
            tera,
            tile_url: tile_url.into(),
        })
    }

    #[tracing::instrument(skip_all, fields(state = state.name()))]
    pub fn render(
        &self,
        state: &UiState,
        form: &AddressForm,
        errors: &FieldErrors,
        alert: Option<&str>,
    ) -> Result<String, Error> {
        let mut ctx = Context::new();
        ctx.insert("state", state.name());
        ctx.insert("form", form);
        ctx.insert("origin_error", &errors.origin);
        ctx.insert("destination_error", &errors.destination);
        ctx.insert("summary", &state.trip().map(|trip| trip.summary()));
        ctx.insert("alert", &alert);
        ctx.insert("map", &self.map_json(state)?);

        self.tera.render(PAGE_TEMPLATE, &ctx).map_err(|err| {
            tracing::error!(%err, "failed to render page");
            unexpected_error()
        })
    }

    fn map_json(&self, state: &UiState) -> Result<String, Error> {
        let route = state.trip().map(|trip| {
            trip.route
                .points
                .iter()
                .map(|point| [point.lat, point.lon])
                .collect()
        });

        let map = MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: &self.tile_url,
            attribution: TILE_ATTRIBUTION,
            route,
        };

        let json = serde_json::to_string(&map).map_err(|_| unexpected_error())?;

        // inlined into a <script> block
        Ok(json.replace("</", "<\\/"))
    }
}
