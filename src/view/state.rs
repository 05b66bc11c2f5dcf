use serde::{Deserialize, Serialize};

use crate::{
    entities::{AddressForm, AddressRequest, Trip},
    error::Error,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum UiState {
    Initial,
    Loading,
    Ready { trip: Trip },
    Error { alert: Option<String> },
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Loading => "loading",
            Self::Ready { trip: _ } => "ready",
            Self::Error { alert: _ } => "error",
        }
    }

    pub fn trip(&self) -> Option<&Trip> {
        match self {
            Self::Ready { trip } => Some(trip),
            _ => None,
        }
    }
}

/// Ticket handed out when a submission starts. Only the newest ticket may
/// change the state once its lookup finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Submission(u64);

#[derive(Debug)]
pub struct ViewState {
    state: UiState,
    form: AddressForm,
    latest: u64,
    alert_shown: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            state: UiState::Initial,
            form: AddressForm::default(),
            latest: 0,
            alert_shown: false,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Values last submitted, used to refill the form.
    pub fn form(&self) -> &AddressForm {
        &self.form
    }

    /// Hands out the alert of a failed lookup the first time it is asked for,
    /// `None` afterwards.
    pub fn take_alert(&mut self) -> Option<String> {
        match &self.state {
            UiState::Error { alert: Some(alert) } if !self.alert_shown => {
                self.alert_shown = true;
                Some(alert.clone())
            }
            _ => None,
        }
    }

    /// Discards whatever was shown and enters `Loading`.
    pub fn begin(&mut self, request: &AddressRequest) -> Submission {
        self.latest += 1;
        self.state = UiState::Loading;
        self.form = AddressForm {
            alamat_asal: request.origin.clone(),
            alamat_tujuan: request.destination.clone(),
        };

        Submission(self.latest)
    }

    /// Applies a finished lookup. Returns `false` when a newer submission has
    /// started since, in which case the outcome is dropped.
    pub fn complete(&mut self, submission: Submission, outcome: Result<Trip, Error>) -> bool {
        if submission.0 != self.latest {
            tracing::debug!(?submission, latest = self.latest, "dropping stale outcome");
            return false;
        }

        self.alert_shown = false;
        self.state = match outcome {
            Ok(trip) => UiState::Ready { trip },
            Err(err) => {
                tracing::warn!(%err, "booking lookup failed");
                UiState::Error {
                    alert: err.alert().map(String::from),
                }
            }
        };

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Coordinate, Route};
    use crate::error::{geocode_not_found, geocode_unavailable};

    fn request(origin: &str) -> AddressRequest {
        AddressRequest::new(origin, "Blok M").unwrap()
    }

    fn trip(request: AddressRequest, meters: f64) -> Trip {
        let a = Coordinate::new(-6.1754, 106.8272);
        let b = Coordinate::new(-6.2443, 106.8002);
        Trip::new(request, a, b, Route::new(vec![a, b], meters))
    }

    #[test]
    fn starts_initial() {
        let view = ViewState::new();
        assert_eq!(view.state().name(), "initial");
        assert!(view.state().trip().is_none());
    }

    #[test]
    fn submit_then_ready() {
        let mut view = ViewState::new();
        let request = request("Monas");

        let submission = view.begin(&request);
        assert_eq!(view.state().name(), "loading");
        assert_eq!(view.form().alamat_asal, "Monas");

        assert!(view.complete(submission, Ok(trip(request, 15_000.0))));
        assert_eq!(view.state().trip().unwrap().metrics.price_idr, 1_500_000);
    }

    #[test]
    fn not_found_carries_alert() {
        let mut view = ViewState::new();
        let submission = view.begin(&request("nowhere"));

        view.complete(submission, Err(geocode_not_found("nowhere")));

        match view.state() {
            UiState::Error { alert } => assert_eq!(
                alert.as_deref(),
                Some("Tidak dapat menemukan lokasi untuk alamat: nowhere")
            ),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn alert_is_handed_out_once() {
        let mut view = ViewState::new();
        let submission = view.begin(&request("nowhere"));
        view.complete(submission, Err(geocode_not_found("nowhere")));

        assert_eq!(
            view.take_alert().as_deref(),
            Some("Tidak dapat menemukan lokasi untuk alamat: nowhere")
        );
        assert_eq!(view.take_alert(), None);
        assert_eq!(view.state().name(), "error");

        let submission = view.begin(&request("Atlantis"));
        view.complete(submission, Err(geocode_not_found("Atlantis")));
        assert!(view.take_alert().is_some());
    }

    #[test]
    fn network_failure_has_no_alert() {
        let mut view = ViewState::new();
        let submission = view.begin(&request("Monas"));

        view.complete(submission, Err(geocode_unavailable()));

        assert!(matches!(view.state(), UiState::Error { alert: None }));
    }

    #[test]
    fn new_submission_discards_old_trip() {
        let mut view = ViewState::new();
        let first = request("Monas");
        let submission = view.begin(&first);
        view.complete(submission, Ok(trip(first, 15_000.0)));

        view.begin(&request("Kota Tua"));

        assert_eq!(view.state().name(), "loading");
        assert!(view.state().trip().is_none());
    }

    #[test]
    fn latest_submission_wins_regardless_of_completion_order() {
        let mut view = ViewState::new();
        let first_request = request("Monas");
        let second_request = request("Kota Tua");

        let first = view.begin(&first_request);
        let second = view.begin(&second_request);

        assert!(view.complete(second, Ok(trip(second_request, 500.0))));
        assert!(!view.complete(first, Ok(trip(first_request, 15_000.0))));

        let shown = view.state().trip().unwrap();
        assert_eq!(shown.request.origin, "Kota Tua");
        assert_eq!(shown.metrics.price_idr, 50_000);
    }

    #[test]
    fn stale_failure_does_not_clear_loading() {
        let mut view = ViewState::new();
        let first = view.begin(&request("nowhere"));
        view.begin(&request("Monas"));

        assert!(!view.complete(first, Err(geocode_not_found("nowhere"))));
        assert_eq!(view.state().name(), "loading");
    }

    #[test]
    fn serializes_with_state_name() {
        let json = serde_json::to_value(UiState::Error { alert: None }).unwrap();
        assert_eq!(json["name"], "error");
        assert!(json["alert"].is_null());
    }
}
