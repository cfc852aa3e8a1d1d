//! REST helpers for the remote trip API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` so pages can log a failed request and leave
//! the form as it was. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivityDay, CreateActivityRequest, CreateTripRequest, Trip};
#[cfg(feature = "hydrate")]
use super::types::{ActivitiesEnvelope, CreateTripResponse, TripEnvelope};

/// Failure of a trip API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
    /// The service answered with a non-2xx status.
    #[error("trip service responded with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn trips_endpoint(base: &str) -> String {
    format!("{base}/trips")
}

#[cfg(any(test, feature = "hydrate"))]
fn trip_endpoint(base: &str, trip_id: &str) -> String {
    format!("{base}/trips/{trip_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn trip_activities_endpoint(base: &str, trip_id: &str) -> String {
    format!("{base}/trips/{trip_id}/activities")
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a trip via `POST /trips` and return the new trip's identifier.
///
/// # Errors
///
/// Returns an error if the request fails, the service rejects it, or the
/// response lacks `tripId`.
pub async fn create_trip(request: &CreateTripRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = trips_endpoint(&crate::util::config::api_base_url());
        let resp = post_json(&url, request).await?;
        let body: CreateTripResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.trip_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Register an activity via `POST /trips/{trip_id}/activities`.
///
/// The response body is ignored.
///
/// # Errors
///
/// Returns an error if the request fails or the service rejects it.
pub async fn create_activity(trip_id: &str, request: &CreateActivityRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = trip_activities_endpoint(&crate::util::config::api_base_url(), trip_id);
        post_json(&url, request).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (trip_id, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a trip via `GET /trips/{trip_id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the trip does not exist, or the
/// body cannot be decoded.
pub async fn fetch_trip(trip_id: &str) -> Result<Trip, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = trip_endpoint(&crate::util::config::api_base_url(), trip_id);
        let body: TripEnvelope = get_json(&url).await?;
        Ok(body.trip)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = trip_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a trip's activities, grouped per day, via `GET /trips/{trip_id}/activities`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_activities(trip_id: &str) -> Result<Vec<ActivityDay>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = trip_activities_endpoint(&crate::util::config::api_base_url(), trip_id);
        let body: ActivitiesEnvelope = get_json(&url).await?;
        Ok(body.activities)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = trip_id;
        Err(ApiError::Unavailable)
    }
}
