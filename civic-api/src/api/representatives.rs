//! Representative lookup by ZIP code
//!
//! `GET /representatives?zip=11354` returns every representative linked to a
//! geography row with that ZIP code. Titles are qualified with the district,
//! state abbreviation or state name of the matching geography row.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};
use civic_common::db::{representatives_for_zip, RepresentativeMatch};

pub const MISSING_ZIP_MESSAGE: &str = "A 'zip' parameter is required.";

/// First non-blank value of the first `zip` pair, trimmed
///
/// Later `zip` pairs are ignored, so `?zip=11354&zip=99999` looks up 11354.
pub fn zip_parameter(params: &[(String, String)]) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| key == "zip")
        .map(|(_, value)| value.trim().to_string())
        .filter(|zip| !zip.is_empty())
}

/// One entry of the lookup response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentativeSummary {
    pub name: String,
    pub title: String,
}

impl From<&RepresentativeMatch> for RepresentativeSummary {
    fn from(m: &RepresentativeMatch) -> Self {
        Self {
            name: m.representative.name.clone(),
            title: m.display_title(),
        }
    }
}

/// Lookup response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub zip: String,
    pub representatives: Vec<RepresentativeSummary>,
}

/// GET /representatives?zip=...
///
/// Missing or empty `zip` is a 400. An unknown ZIP code is an empty list.
/// The query string is read as raw pairs; a malformed one is also a JSON 400.
pub async fn get_representatives(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<LookupResponse>> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let zip = zip_parameter(&params)
        .ok_or_else(|| ApiError::BadRequest(MISSING_ZIP_MESSAGE.to_string()))?;

    let matches = representatives_for_zip(&state.db, &zip).await?;
    let representatives: Vec<RepresentativeSummary> =
        matches.iter().map(RepresentativeSummary::from).collect();

    info!(zip = %zip, count = representatives.len(), "Served representative lookup");

    Ok(Json(LookupResponse {
        zip,
        representatives,
    }))
}

/// Build lookup routes
pub fn representative_routes() -> Router<AppState> {
    Router::new().route("/representatives", get(get_representatives))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_zip_parameter_takes_first_pair() {
        let params = pairs(&[("format", "json"), ("zip", " 11354 "), ("zip", "99999")]);
        assert_eq!(zip_parameter(&params).as_deref(), Some("11354"));
    }

    #[test]
    fn test_zip_parameter_blank_first_pair_is_missing() {
        assert_eq!(zip_parameter(&pairs(&[("zip", ""), ("zip", "11354")])), None);
        assert_eq!(zip_parameter(&pairs(&[("ZIP", "11354")])), None);
        assert_eq!(zip_parameter(&[]), None);
    }
}
