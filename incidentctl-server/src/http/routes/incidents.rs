//! Incident endpoints
//!
//! - `GET /incidents/addresses?q=` - address autocomplete
//! - `GET /incidents/?address=&skip=&limit=` - filtered, paginated list
//! - `GET /incidents/{incident_id}` - single record by primary key

use axum::{routing::get, Json, Router};
use serde::Deserialize;

use crate::db::{IncidentRepo, Session};
use crate::http::error::ApiError;
use crate::http::extractors::{IncidentKey, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Incident, Page, SearchTerm, Validate, ValidationError, DEFAULT_LIMIT};

/// Autocomplete query params
#[derive(Debug, Deserialize)]
pub struct AddressParams {
    pub q: Option<String>,
}

impl Validate for AddressParams {
    type Valid = SearchTerm;

    fn validate(self) -> Result<SearchTerm, ValidationError> {
        let q = self.q.ok_or(ValidationError::Missing { field: "q" })?;
        SearchTerm::new(&q)
    }
}

/// List query params
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub address: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// Address substring; `None` when absent or empty
    pub address: Option<String>,
    pub page: Page,
}

impl Validate for ListParams {
    type Valid = ListFilter;

    fn validate(self) -> Result<ListFilter, ValidationError> {
        Ok(ListFilter {
            address: self.address.filter(|a| !a.is_empty()),
            page: Page::new(self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT)),
        })
    }
}

/// GET /incidents/addresses - distinct matching addresses, at most 10
async fn autocomplete_addresses(
    ValidQuery(term): ValidQuery<AddressParams>,
    mut session: Session,
) -> Result<Json<Vec<String>>, ApiError> {
    let addresses = IncidentRepo::new(&mut session)
        .autocomplete_addresses(&term)
        .await?;
    Ok(Json(addresses))
}

/// GET /incidents/ - list incidents, optionally filtered by address
async fn read_incidents(
    ValidQuery(filter): ValidQuery<ListParams>,
    mut session: Session,
) -> Result<Json<Vec<Incident>>, ApiError> {
    let incidents = IncidentRepo::new(&mut session)
        .list(filter.address.as_deref(), filter.page)
        .await?;
    Ok(Json(incidents))
}

/// GET /incidents/{incident_id} - one incident by primary key
///
/// NOTE: the path segment is named `incident_id` but is matched against
/// the `id` primary key, not the `incident_id` column. Kept as-is for
/// client compatibility; it looks like a naming slip upstream.
async fn read_incident(
    IncidentKey(key): IncidentKey,
    mut session: Session,
) -> Result<Json<Incident>, ApiError> {
    // keys outside the column's range can't exist
    let id = i32::try_from(key).map_err(|_| ApiError::NotFound {
        resource: "incident",
        id: key.to_string(),
    })?;

    let incident = IncidentRepo::new(&mut session).get(id).await?;
    Ok(Json(incident))
}

/// Incident routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/incidents", get(read_incidents))
        .route("/incidents/", get(read_incidents))
        .route("/incidents/addresses", get(autocomplete_addresses))
        .route("/incidents/{incident_id}", get(read_incident))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_query_fails_validation() {
        let err = AddressParams { q: Some("m".into()) }.validate().unwrap_err();
        assert_eq!(err.field(), "q");
    }

    #[test]
    fn missing_query_names_q() {
        let err = AddressParams { q: None }.validate().unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "q" });
    }

    #[test]
    fn list_defaults() {
        let filter = ListParams::default().validate().unwrap();
        assert_eq!(filter.address, None);
        assert_eq!(filter.page, Page::new(0, 20));
    }

    #[test]
    fn empty_address_means_no_filter() {
        let params = ListParams {
            address: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap().address, None);
    }
}
