//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check: pings MongoDB within the store timeout
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let timeout = state.config.items.store_timeout();
    let client = state.mongo_client.clone();

    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "mongodb",
        Box::pin(async move {
            match tokio::time::timeout(timeout, database::mongodb::ping(&client)).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(_) => Err(format!("ping timed out after {:?}", timeout)),
            }
        }),
    )];

    run_health_checks(checks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, ItemsConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{MongoConfig, client_from_config};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_is_503_when_mongo_unreachable() {
        // Nothing listens on port 1.
        let mongodb = MongoConfig::new("mongodb://127.0.0.1:1").with_server_selection_timeout(1);
        let mongo_client = client_from_config(&mongodb).await.unwrap();
        let db = mongo_client.database(mongodb.database());

        let state = AppState {
            config: Config {
                app: app_info!(),
                mongodb,
                server: ServerConfig::default(),
                items: ItemsConfig {
                    store_timeout_ms: 200,
                    ..ItemsConfig::default()
                },
                environment: Environment::Development,
            },
            mongo_client,
            db,
        };

        let response = router(state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
    }
}
