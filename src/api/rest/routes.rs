//! # REST Routes
//!
//! Route definitions for the REST API.
//!
//! # Route Structure
//!
//! ```text
//! /api/v1
//! ├── /health              GET    - Health check
//! ├── /register            POST   - Register an account
//! ├── /pets                GET    - List caller's pets
//! │   └── /                POST   - Create a pet
//! ├── /lots                GET    - List open lots
//! │   ├── /                POST   - Create a lot
//! │   └── /{id}
//! │       ├── /bids        GET    - List active bids on the lot
//! │       └── /close       POST   - Author closes the lot
//! └── /bids                GET    - List active bids
//!     ├── /                POST   - Place a bid
//!     └── /{id}            DELETE - Withdraw an own bid
//!         └── /accept      POST   - Accept a bid and settle
//! ```

use crate::api::rest::handlers::{
    accept_bid, close_lot, create_lot, create_pet, health_check, list_bids, list_lot_bids,
    list_lots, list_pets, place_bid, register, withdraw_bid, AppState,
};
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the REST API router with all endpoints and middleware.
///
/// # Arguments
///
/// * `state` - Shared application state containing repositories and use
///   cases
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(api_v1(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_v1(state: Arc<AppState>) -> Router {
    let pet_routes = Router::new().route("/", get(list_pets).post(create_pet));

    let lot_routes = Router::new()
        .route("/", get(list_lots).post(create_lot))
        .route("/{id}/bids", get(list_lot_bids))
        .route("/{id}/close", post(close_lot));

    let bid_routes = Router::new()
        .route("/", get(list_bids).post(place_bid))
        .route("/{id}", delete(withdraw_bid))
        .route("/{id}/accept", post(accept_bid));

    let api = Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .nest("/pets", pet_routes)
        .nest("/lots", lot_routes)
        .nest("/bids", bid_routes);

    Router::new().nest("/api/v1", api).with_state(state)
}

/// Creates a minimal router for testing without middleware.
#[cfg(test)]
pub fn create_test_router(state: Arc<AppState>) -> Router {
    api_v1(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::rest::handlers::ACCOUNT_ID_HEADER;
    use crate::domain::value_objects::Money;
    use crate::infrastructure::persistence::in_memory::InMemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn create_test_state() -> Arc<AppState> {
        let store = InMemoryStore::new();
        let starting_balance: Money = "100.00".parse().unwrap();
        Arc::new(AppState::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            starting_balance,
        ))
    }

    #[tokio::test]
    async fn health_check_endpoint() {
        let router = create_test_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn register_endpoint_creates_an_account() {
        let router = create_test_router(create_test_state());

        let body = serde_json::json!({ "username": "alice" });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/register")
                    .header("Content-Type", "application/json")
                    .body(Body::from(serde_json::to_string(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn missing_caller_header_is_unauthorized() {
        let router = create_test_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/pets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_caller_is_forbidden() {
        let router = create_test_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/pets")
                    .header(ACCOUNT_ID_HEADER, Uuid::new_v4().to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_lot_bids_is_not_found() {
        let state = create_test_state();
        let router = create_test_router(state.clone());

        // Need a registered caller to get past the account check.
        let register_body = serde_json::json!({ "username": "alice" });
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/register")
                    .header("Content-Type", "application/json")
                    .body(Body::from(serde_json::to_string(&register_body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let account: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let account_id = account["id"].as_str().unwrap().to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/lots/{}/bids", Uuid::new_v4()))
                    .header(ACCOUNT_ID_HEADER, account_id)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
