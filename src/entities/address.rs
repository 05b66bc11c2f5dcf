use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

pub const ORIGIN_REQUIRED: &str = "Alamat Asal harus diisi";
pub const DESTINATION_REQUIRED: &str = "Alamat Tujuan harus diisi";

/// Raw form body as posted by the booking page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddressForm {
    #[serde(default)]
    pub alamat_asal: String,
    #[serde(default)]
    pub alamat_tujuan: String,
}

/// Two validated, trimmed addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    pub origin: String,
    pub destination: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.destination.is_none()
    }
}

impl AddressRequest {
    pub fn new(origin: &str, destination: &str) -> Result<Self, Error> {
        let origin = origin.trim();
        let destination = destination.trim();

        let fields = FieldErrors {
            origin: origin.is_empty().then(|| ORIGIN_REQUIRED.to_string()),
            destination: destination.is_empty().then(|| DESTINATION_REQUIRED.to_string()),
        };

        if !fields.is_empty() {
            return Err(validation_error(fields));
        }

        Ok(Self {
            origin: origin.into(),
            destination: destination.into(),
        })
    }
}

impl TryFrom<&AddressForm> for AddressRequest {
    type Error = Error;

    fn try_from(form: &AddressForm) -> Result<Self, Self::Error> {
        AddressRequest::new(&form.alamat_asal, &form.alamat_tujuan)
    }
}
