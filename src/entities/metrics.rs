use serde::{Deserialize, Serialize};

/// Fixed average speed used for the time estimate.
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Fare per kilometre, applied to the distance rounded to two decimals.
pub const RATE_PER_KM_IDR: f64 = 100_000.0;

/// Shown next to every price. Not enforced by the fare formula.
pub const MINIMUM_FARE_NOTE: &str = "*dibawah 1 KM = Rp. 12.000";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripMetrics {
    pub distance_km: f64,
    pub estimated_minutes: f64,
    pub price_idr: u64,
}

impl TripMetrics {
    pub fn from_distance(total_distance_meters: f64) -> Self {
        let distance_km = total_distance_meters / 1000.0;
        let estimated_minutes = distance_km / AVERAGE_SPEED_KMH * 60.0;
        let price_idr = (to_fixed_2(distance_km) * RATE_PER_KM_IDR).ceil() as u64;

        TripMetrics {
            distance_km,
            estimated_minutes,
            price_idr,
        }
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary {
            distance: format!("{:.2} km", to_fixed_2(self.distance_km)),
            estimated_time: format!("{} menit", self.estimated_minutes.ceil() as u64),
            price: format!("Rp. {},- *", format_idr(self.price_idr)),
            note: MINIMUM_FARE_NOTE.into(),
        }
    }
}

/// Human readable rendition of [`TripMetrics`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    pub distance: String,
    pub estimated_time: String,
    pub price: String,
    pub note: String,
}

/// Rounds to two decimals the way `Number.prototype.toFixed(2)` does in a
/// browser: the stored binary value goes to the nearest hundredth, exact
/// midpoints upward.
pub fn to_fixed_2(value: f64) -> f64 {
    // a stored value sits exactly between two hundredths only when it is an
    // odd multiple of 1/8 (0.125, 1.375, ...)
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return (value * 100.0).ceil() / 100.0;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Formats an amount with `.` as thousands separator (id-ID locale).
pub fn format_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out
}
