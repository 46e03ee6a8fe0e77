use axum::Router;
use axum::body::Body;
use axum::http::Request;
use jsonwebtoken::Algorithm;
use sqlx::PgPool;

use tokensmith::config::api_key::ApiKeyConfig;
use tokensmith::config::cors::CorsConfig;
use tokensmith::config::jwt::JwtConfig;
use tokensmith::modules::revocation::RevocationStore;
use tokensmith::router::init_router;
use tokensmith::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        algorithm: Algorithm::HS256,
        access_token_expiry: 3600,
        refresh_token_expiry: 604800,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        revocation: RevocationStore::new(pool),
        jwt_config: test_jwt_config(),
        api_config: ApiKeyConfig {
            api_key: TEST_API_KEY.to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

/// Build a gated POST request with a JSON body.
pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", TEST_API_KEY))
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json_with_key(uri: &str, body: &serde_json::Value, api_key: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", api_key))
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json_without_key(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
