//! # Document Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `GET`  | `/v1/documents` | Catalogue of supported kinds |
//! | `GET`  | `/v1/documents/{kind}/generate` | Random valid numbers |
//! | `POST` | `/v1/documents/{kind}/validate` | Verdict for one input |
//!
//! Validation answers 200 for both valid and invalid documents; the verdict
//! says which. Unknown kinds are 404, out-of-range parameters 422.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use brdoc_core::{catalogue, generate_with, validate, DocumentKind, GenerateOptions, KindSummary, Rejection, Uf, Verdict};

use crate::error::AppError;
use crate::state::AppState;

/// Build the document router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/documents", get(list_kinds))
        .route("/v1/documents/{kind}/generate", get(generate_documents))
        .route("/v1/documents/{kind}/validate", post(validate_document))
}

// -- DTOs ---------------------------------------------------------------------

/// One supported document kind.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KindInfo {
    /// Identifier used in paths, e.g. `cpf` or `ie_sp`.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Accepted digit counts, current layout first.
    pub lengths: Vec<usize>,
    /// Punctuation template of the current layout.
    pub template: String,
}

impl From<KindSummary> for KindInfo {
    fn from(row: KindSummary) -> Self {
        Self {
            id: row.id,
            label: row.label,
            lengths: row.lengths,
            template: row.template.to_string(),
        }
    }
}

/// Catalogue response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KindsResponse {
    pub kinds: Vec<KindInfo>,
}

/// Query parameters for generation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Number of documents, `1..=max_batch`. Defaults to 1.
    pub count: Option<usize>,
    /// Federative unit pinning the CPF fiscal region or voter-title region.
    pub uf: Option<String>,
    /// Return raw digits instead of punctuated numbers.
    #[serde(default)]
    pub raw: bool,
}

/// Generated documents.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub kind: String,
    pub documents: Vec<String>,
}

/// Validation request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateRequest {
    /// Document number, punctuated or raw.
    pub input: String,
}

/// Validation outcome.
///
/// Mirrors [`Verdict`] so the schema can be derived here; `brdoc-core`
/// carries no `utoipa` dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateResponse {
    pub kind: String,
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,
    /// Machine-readable rejection: a `code` tag plus its details.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub reason: Option<Rejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Verdict> for ValidateResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            kind: verdict.kind.id(),
            input: verdict.input,
            valid: verdict.valid,
            normalized: verdict.normalized,
            formatted: verdict.formatted,
            states: verdict.states.iter().map(|uf| uf.as_str().to_string()).collect(),
            reason: verdict.reason,
            message: verdict.message,
        }
    }
}

// -- Handlers -----------------------------------------------------------------

fn parse_kind(raw: &str) -> Result<DocumentKind, AppError> {
    Ok(raw.parse::<DocumentKind>()?)
}

/// GET /v1/documents: List supported document kinds.
#[utoipa::path(
    get,
    path = "/v1/documents",
    responses(
        (status = 200, description = "Supported document kinds", body = KindsResponse),
    ),
    tag = "documents"
)]
pub async fn list_kinds() -> Json<KindsResponse> {
    let kinds = catalogue().into_iter().map(KindInfo::from).collect();
    Json(KindsResponse { kinds })
}

/// GET /v1/documents/{kind}/generate: Generate random valid numbers.
#[utoipa::path(
    get,
    path = "/v1/documents/{kind}/generate",
    params(
        ("kind" = String, Path, description = "Document kind, e.g. cpf or ie_sp"),
        GenerateQuery,
    ),
    responses(
        (status = 200, description = "Generated documents", body = GenerateResponse),
        (status = 404, description = "Unknown document kind", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid count or unit", body = crate::error::ErrorBody),
    ),
    tag = "documents"
)]
pub async fn generate_documents(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let kind = parse_kind(&kind)?;
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let count = query.count.unwrap_or(1);
    let max = state.config.max_batch;
    if count == 0 || count > max {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {max}, got {count}"
        )));
    }
    let region = query.uf.as_deref().map(str::parse::<Uf>).transpose()?;

    let documents = generate_batch(kind, GenerateOptions { region }, count, query.raw);
    tracing::debug!(kind = %kind, count, "generated documents");
    Ok(Json(GenerateResponse {
        kind: kind.id(),
        documents,
    }))
}

fn generate_batch(kind: DocumentKind, options: GenerateOptions, count: usize, raw: bool) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let doc = generate_with(kind, &options, &mut rng);
            if raw {
                doc.digits()
            } else {
                doc.formatted()
            }
        })
        .collect()
}

/// POST /v1/documents/{kind}/validate: Validate one document number.
#[utoipa::path(
    post,
    path = "/v1/documents/{kind}/validate",
    params(("kind" = String, Path, description = "Document kind, e.g. cpf or ie_sp")),
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Verdict for the input, valid or not", body = ValidateResponse),
        (status = 404, description = "Unknown document kind", body = crate::error::ErrorBody),
        (status = 422, description = "Malformed request body", body = crate::error::ErrorBody),
    ),
    tag = "documents"
)]
pub async fn validate_document(
    Path(kind): Path<String>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let kind = parse_kind(&kind)?;
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(validate(kind, &request.input).into()))
}
