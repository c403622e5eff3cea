use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Booking lifecycle status. Lowercase on the wire, case-insensitive on
/// read. Records without a status are treated as `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(()),
        }
    }
}

// The API does not promise a closed status set; unrecognized or null
// strings degrade to Pending rather than failing the whole record.
impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}

/// A user's reservation of a service, as returned by the marketplace API.
///
/// Field names vary between deployments (`serviceName` vs `service_title`,
/// `price` vs `total_price`); aliases and helpers paper over that here so
/// callers see one shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default, alias = "serviceId")]
    pub service_id: Option<String>,
    #[serde(default, alias = "serviceName", alias = "service_title")]
    pub service_name: Option<String>,
    #[serde(default)]
    pub service_category: Option<String>,
    #[serde(default, alias = "bookingDate")]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// `total_price` wins over `price` when both are present.
    pub fn effective_price(&self) -> Option<f64> {
        self.total_price.or(self.price)
    }

    /// Parse the booking date when it is a plain `YYYY-MM-DD` string.
    pub fn booking_date_parsed(&self) -> Option<NaiveDate> {
        self.booking_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

/// Payload for `POST /bookings`. The API expects camelCase field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_email: String,
    pub service_id: String,
    pub service_name: String,
    pub booking_date: String,
    pub price: f64,
}
