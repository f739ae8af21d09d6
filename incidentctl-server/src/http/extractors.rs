//! Custom Axum extractors
//!
//! Both map their failures to `ApiError::Validation` (422) instead of
//! axum's default 400 rejections.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Validate, ValidationError};

/// Deserialize the query string into `T` and validate it.
///
/// Deserialization goes through `serde_path_to_error`, so a bad value is
/// reported against the parameter that carried it (`skip`, `limit`, ...).
/// Runs entirely on request parts, so a handler that takes this before a
/// `Session` never touches the database for bad input.
pub struct ValidQuery<T: Validate>(pub T::Valid);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: Validate + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw: T = parse_query(parts.uri.query().unwrap_or_default())?;
        Ok(Self(raw.validate()?))
    }
}

fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T, ValidationError> {
    let deserializer =
        serde_urlencoded::Deserializer::new(form_urlencoded::parse(query.as_bytes()));

    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path();
        let field = if path.iter().next().is_some() {
            path.to_string()
        } else {
            "query".to_owned()
        };
        ValidationError::Malformed {
            field,
            detail: err.inner().to_string(),
        }
    })
}

/// Extract the integer key from `/incidents/{incident_id}`
pub struct IncidentKey(pub i64);

impl<S> FromRequestParts<S> for IncidentKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "incident_id",
                reason: "must be an integer",
            })
        };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        let key = raw.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self(key))
    }
}
