//! Wire DTOs for the remote trip API.
//!
//! DESIGN
//! ======
//! Field names follow the service's JSON (`snake_case` bodies, a camel-case
//! `tripId` in the create response). Timestamps are RFC 3339 on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of `POST /trips`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTripRequest {
    pub destination: String,
    /// First day of the trip, UTC midnight.
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    /// Last day of the trip, UTC midnight.
    #[serde(with = "time::serde::rfc3339")]
    pub ends_at: OffsetDateTime,
    pub emails_to_invite: Vec<String>,
    pub owner_name: String,
    pub owner_email: String,
}

/// Response of `POST /trips`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateTripResponse {
    #[serde(rename = "tripId")]
    pub trip_id: String,
}

/// Body of `POST /trips/{trip_id}/activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateActivityRequest {
    pub title: String,
    /// Raw `datetime-local` value, e.g. `2024-07-10T14:30`.
    pub occurs_at: String,
}

/// A trip as returned by `GET /trips/{trip_id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ends_at: OffsetDateTime,
    #[serde(default)]
    pub is_confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TripEnvelope {
    pub trip: Trip,
}

/// One registered activity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub occurs_at: OffsetDateTime,
}

/// Activities of a single trip day, as grouped by the service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityDay {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActivitiesEnvelope {
    pub activities: Vec<ActivityDay>,
}
