use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::sim::{Coordinate, DEFAULT_COORDINATE};

use super::error::{bad_request, ErrorResponse};

#[derive(Debug, Deserialize)]
struct LocationQuery {
    lat: Option<f64>,
    lng: Option<f64>,
}

/// Caller-supplied map location, read from the `lat`/`lng` query parameters.
///
/// Missing parameters fall back to the reference point. A value that does
/// not parse as a float rejects the request with a structured 400 instead of
/// bubbling up as a framework error.
pub struct Location(pub Coordinate);

impl<S> FromRequestParts<S> for Location
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<LocationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                bad_request(format!("invalid query parameter: {}", rejection.body_text()))
            })?;

        Ok(Self(Coordinate {
            lat: query.lat.unwrap_or(DEFAULT_COORDINATE.lat),
            lng: query.lng.unwrap_or(DEFAULT_COORDINATE.lng),
        }))
    }
}
