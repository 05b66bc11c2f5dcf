use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug};

use crate::entities::FieldErrors;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
    pub fields: FieldErrors,
}

impl Error {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Error {
            code,
            message: message.into(),
            fields: FieldErrors::default(),
        }
    }

    /// Message that can be shown to the person filling in the form, if any.
    pub fn alert(&self) -> Option<&str> {
        match self.code {
            GEOCODE_NOT_FOUND => Some(self.message.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = if self.fields.is_empty() {
            Json(json!({
                "code": self.code,
                "error": error_message,
            }))
        } else {
            Json(json!({
                "code": self.code,
                "error": error_message,
                "fields": self.fields,
            }))
        };

        (status, body).into_response()
    }
}

const GEOCODE_NOT_FOUND: i32 = 103;

pub fn validation_error(fields: FieldErrors) -> Error {
    Error {
        fields,
        ..Error::new(102, "validation error")
    }
}

pub fn geocode_not_found(address: &str) -> Error {
    Error::new(
        GEOCODE_NOT_FOUND,
        format!("Tidak dapat menemukan lokasi untuk alamat: {}", address),
    )
}

pub fn geocode_unavailable() -> Error {
    Error::new(104, "geocoding unavailable")
}

pub fn route_not_found() -> Error {
    Error::new(105, "route not found")
}

pub fn env_var_error<T: Debug>(_: T) -> Error {
    Error::new(1, "environment variable error")
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error::new(3, "reqwest error")
}

pub fn upstream_error() -> Error {
    Error::new(4, "upstream error")
}

pub fn unexpected_error() -> Error {
    Error::new(5, "unexpected error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_errors_hide_their_message() {
        let response = upstream_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        assert_eq!(
            route_not_found().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            geocode_unavailable().into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn only_not_found_geocodes_raise_an_alert() {
        let err = geocode_not_found("Jalan Antah Berantah");
        assert_eq!(
            err.alert(),
            Some("Tidak dapat menemukan lokasi untuk alamat: Jalan Antah Berantah")
        );
        assert_eq!(geocode_unavailable().alert(), None);
        assert_eq!(route_not_found().alert(), None);
    }
}
