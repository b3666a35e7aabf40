//! # Integration Tests for brdoc-api
//!
//! Drives the assembled router with `oneshot` requests: health probe, kind
//! catalogue, generation with its parameter checks, validation verdicts and
//! the OpenAPI document.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use brdoc_api::state::{AppConfig, AppState};
use brdoc_core::{validate, DocumentKind, Uf};

/// Helper: build the test app with default configuration.
fn test_app() -> axum::Router {
    brdoc_api::app(AppState::new())
}

/// Helper: build the test app with a small batch ceiling.
fn test_app_with_max_batch(max_batch: usize) -> axum::Router {
    let config = AppConfig {
        max_batch,
        ..AppConfig::default()
    };
    brdoc_api::app(AppState::with_config(config))
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: axum::Router, uri: &str, body: &str) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// -- Health Probe -------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = get(test_app(), "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get(test_app(), "/v2/nothing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Catalogue ----------------------------------------------------------------

#[tokio::test]
async fn test_list_kinds() {
    let response = get(test_app(), "/v1/documents").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let kinds = body["kinds"].as_array().unwrap();
    assert_eq!(kinds.len(), 34);
    assert_eq!(kinds[0]["id"], "cpf");
    assert_eq!(kinds[0]["template"], "###.###.###-##");

    let ba = kinds.iter().find(|k| k["id"] == "ie_ba").unwrap();
    assert_eq!(ba["lengths"], serde_json::json!([9, 8]));
}

// -- Generation ---------------------------------------------------------------

#[tokio::test]
async fn test_generate_defaults_to_one_formatted_document() {
    let response = get(test_app(), "/v1/documents/cnpj/generate").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "cnpj");
    let documents = body["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 1);
    let number = documents[0].as_str().unwrap();
    assert_eq!(number.len(), "00.000.000/0000-00".len());
    assert!(validate(DocumentKind::Cnpj, number).valid);
}

#[tokio::test]
async fn test_generate_batch_of_raw_state_registrations() {
    let response = get(test_app(), "/v1/documents/ie_sp/generate?count=5&raw=true").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "ie_sp");
    let documents = body["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 5);
    for doc in documents {
        let number = doc.as_str().unwrap();
        assert_eq!(number.len(), 12);
        assert!(number.bytes().all(|b| b.is_ascii_digit()));
        assert!(validate(DocumentKind::StateRegistration(Uf::Sp), number).valid);
    }
}

#[tokio::test]
async fn test_generate_accepts_kind_aliases() {
    let response = get(test_app(), "/v1/documents/voter-title/generate").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "voter_title");
}

#[tokio::test]
async fn test_generate_cpf_pinned_to_unit() {
    let response = get(test_app(), "/v1/documents/cpf/generate?count=10&raw=true&uf=sp").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    for doc in body["documents"].as_array().unwrap() {
        let number = doc.as_str().unwrap();
        assert_eq!(&number[8..9], "8", "SP is fiscal region 8: {number}");
        let verdict = validate(DocumentKind::Cpf, number);
        assert_eq!(verdict.states, vec![Uf::Sp]);
    }
}

#[tokio::test]
async fn test_generate_voter_title_pinned_to_unit() {
    let response = get(test_app(), "/v1/documents/voter_title/generate?count=5&uf=MG").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    for doc in body["documents"].as_array().unwrap() {
        let verdict = validate(DocumentKind::VoterTitle, doc.as_str().unwrap());
        assert!(verdict.valid);
        assert_eq!(verdict.states, vec![Uf::Mg]);
    }
}

#[tokio::test]
async fn test_generate_unknown_kind_is_404() {
    let response = get(test_app(), "/v1/documents/cnh/generate").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("cnh"));
}

#[tokio::test]
async fn test_generate_count_zero_is_422() {
    let response = get(test_app(), "/v1/documents/cpf/generate?count=0").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_generate_count_above_ceiling_is_422() {
    let app = test_app_with_max_batch(3);
    let response = get(app.clone(), "/v1/documents/cpf/generate?count=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/v1/documents/cpf/generate?count=4").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("between 1 and 3"));
}

#[tokio::test]
async fn test_generate_non_numeric_count_is_422() {
    let response = get(test_app(), "/v1/documents/cpf/generate?count=many").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_generate_unknown_unit_is_422() {
    let response = get(test_app(), "/v1/documents/cpf/generate?uf=XX").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// -- Validation ---------------------------------------------------------------

#[tokio::test]
async fn test_validate_valid_cpf() {
    let response = post_json(
        test_app(),
        "/v1/documents/cpf/validate",
        r#"{"input": "111.444.777-35"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["kind"], "cpf");
    assert_eq!(body["normalized"], "11144477735");
    assert_eq!(body["formatted"], "111.444.777-35");
    assert_eq!(body["states"], serde_json::json!(["ES", "RJ"]));
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_validate_invalid_cpf_answers_200_with_reason() {
    let response = post_json(
        test_app(),
        "/v1/documents/cpf/validate",
        r#"{"input": "111.444.777-36"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"]["code"], "checksum_mismatch");
    assert_eq!(body["reason"]["position"], 10);
    assert_eq!(body["reason"]["expected"], "5");
    assert_eq!(body["reason"]["found"], "6");
    assert_eq!(body["message"], "verifier digit 11 should be 5, found 6");
    assert!(body.get("formatted").is_none());
}

#[tokio::test]
async fn test_validate_length_mismatch() {
    let response = post_json(
        test_app(),
        "/v1/documents/renavam/validate",
        r#"{"input": "123"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["reason"]["code"], "length_mismatch");
    assert_eq!(body["reason"]["expected"], serde_json::json!([11, 9]));
    assert_eq!(body["reason"]["found"], 3);
}

#[tokio::test]
async fn test_validate_unknown_electoral_region() {
    let response = post_json(
        test_app(),
        "/v1/documents/voter_title/validate",
        r#"{"input": "0043 5687 2906"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"]["code"], "unknown_region");
    assert_eq!(body["reason"]["region"], 29);
}

#[tokio::test]
async fn test_validate_state_registration() {
    let response = post_json(
        test_app(),
        "/v1/documents/ie_sp/validate",
        r#"{"input": "110.042.490.114"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["kind"], "ie_sp");
}

#[tokio::test]
async fn test_validate_unknown_kind_is_404() {
    let response = post_json(
        test_app(),
        "/v1/documents/ie_xx/validate",
        r#"{"input": "123"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_malformed_body_is_422() {
    let response = post_json(test_app(), "/v1/documents/cpf/validate", "{not json").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_validate_missing_field_is_422() {
    let response = post_json(test_app(), "/v1/documents/cpf/validate", r#"{"number": "1"}"#).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_served() {
    let response = get(test_app(), "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/v1/documents/{kind}/validate"]["post"].is_object());
    assert!(body["components"]["schemas"]["ValidateResponse"].is_object());
}
