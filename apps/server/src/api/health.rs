use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::main_lib::AppState;
use crate::models::{HealthResponse, ServiceInfo};

#[utoipa::path(get, path = "/", responses((status = 200, body = ServiceInfo)))]
pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = [
        ("auth", "/auth"),
        ("expenses", "/expenses"),
        ("recurring", "/recurring"),
        ("budget", "/budget"),
        ("health", "/health"),
        ("openapi", "/openapi.json"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(ServiceInfo {
        name: "Budgify API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Budgify API is running".to_string(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
}
