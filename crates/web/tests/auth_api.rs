//! Authentication gate tests. None of these reach the database: every
//! request is answered or rejected before a query would run.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::{body_json, build_offline_app, get, post_empty, post_form, request, test_jwt};
use feperj_web::auth::jwt::{Claims, issue_token};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

const PROTECTED: &[(&str, &str)] = &[
    ("GET", "/usuarios"),
    ("POST", "/usuarios"),
    ("GET", "/atletas"),
    ("POST", "/atletas"),
    ("GET", "/atletas/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("PUT", "/atletas/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("DELETE", "/atletas/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("GET", "/atletas/cpf/12345678909"),
    ("GET", "/atletas/export"),
    ("GET", "/equipes"),
    ("POST", "/equipes"),
    ("PUT", "/equipes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("DELETE", "/equipes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("GET", "/equipes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e/atletas"),
    ("GET", "/competicoes"),
    ("POST", "/competicoes"),
    ("PUT", "/competicoes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("DELETE", "/competicoes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("GET", "/inscricoes"),
    ("POST", "/inscricoes"),
    ("DELETE", "/inscricoes/4f1c1f4e-8f5b-4a59-9d0e-3f1a1b2c3d4e"),
    ("GET", "/relatorios/dashboard"),
];

fn method(name: &str) -> Method {
    Method::from_bytes(name.as_bytes()).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let app = build_offline_app(false);

    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = build_offline_app(false);

    for (verb, uri) in PROTECTED {
        let response = request(&app, method(verb), uri, None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{verb} {uri}");
        assert_eq!(body_json(response).await["error"], "Token inválido");
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = build_offline_app(false);

    for (verb, uri) in PROTECTED {
        let response = request(&app, method(verb), uri, Some("abc.def.ghi"), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{verb} {uri}");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = build_offline_app(false);

    let request = axum::http::Request::builder()
        .uri("/atletas")
        .header("authorization", "Basic YWRtaW46YWRtaW4=")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = build_offline_app(false);
    let jwt = test_jwt();
    let now = Utc::now().timestamp();
    let token = encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub: "admin".to_string(),
            iat: now - 3600,
            exp: now - 60,
        },
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
    .unwrap();

    let response = get(&app, "/atletas", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = build_offline_app(false);
    let mut other = test_jwt();
    other.secret = "not-the-server-secret".to_string();
    let token = issue_token("admin", &other).unwrap();

    let response = get(&app, "/relatorios/dashboard", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_setup_admin_without_configured_credentials() {
    let app = build_offline_app(false);

    let response = post_empty(&app, "/setup-admin").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_requires_form_fields() {
    let app = build_offline_app(false);

    let response = post_form(&app, "/login", "username=admin").await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_openapi_document_is_public() {
    let app = build_offline_app(false);

    let response = get(&app, "/api-docs/openapi.json", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/atletas"].is_object());
}
