mod address;
mod location;
mod metrics;
mod route;
mod trip;

pub use address::{AddressForm, AddressRequest, FieldErrors, DESTINATION_REQUIRED, ORIGIN_REQUIRED};
pub use location::Coordinate;
pub use metrics::{format_idr, to_fixed_2, TripMetrics, TripSummary, MINIMUM_FARE_NOTE};
pub use route::Route;
pub use trip::Trip;
