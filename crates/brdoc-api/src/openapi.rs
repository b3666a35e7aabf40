//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "brdoc API",
        description = "Generation and validation of Brazilian document numbers: CPF, CNPJ, RG, PIS/PASEP, RENAVAM, voter titles, civil certificate numbers and state registrations.\n\nInvalid documents are reported in the verdict body with status 200. Unknown kinds return 404; malformed parameters return 422.",
        license(name = "AGPL-3.0-or-later")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::documents::list_kinds,
        crate::routes::documents::generate_documents,
        crate::routes::documents::validate_document,
    ),
    components(schemas(
        crate::routes::documents::KindInfo,
        crate::routes::documents::KindsResponse,
        crate::routes::documents::GenerateResponse,
        crate::routes::documents::ValidateRequest,
        crate::routes::documents::ValidateResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "documents", description = "Document generation and validation"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_every_document_path() {
        let spec = ApiDoc::openapi();
        let paths = &spec.paths.paths;
        assert!(paths.contains_key("/v1/documents"));
        assert!(paths.contains_key("/v1/documents/{kind}/generate"));
        assert!(paths.contains_key("/v1/documents/{kind}/validate"));
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("openapi"));
        assert!(json.contains("ValidateResponse"));
    }

    #[test]
    fn router_builds_successfully() {
        let _router = router();
    }
}
