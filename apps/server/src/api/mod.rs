//! HTTP routes. Each resource module exposes a `router()` merged here.

mod auth;
mod budget;
mod expenses;
mod extract;
mod health;
mod recurring;

use std::sync::Arc;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::auth::require_jwt;
use crate::config::Config;
use crate::main_lib::AppState;
use crate::models;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::service_info,
        health::health,
        auth::register,
        auth::login,
        expenses::list_expenses,
        expenses::list_expenses_in_range,
        expenses::get_expense,
        expenses::create_expense,
        expenses::update_expense,
        expenses::delete_expense,
        recurring::list_recurring_costs,
        recurring::get_recurring_cost,
        recurring::create_recurring_cost,
        recurring::update_recurring_cost,
        recurring::delete_recurring_cost,
        budget::get_budget,
        budget::update_budget,
        budget::get_summary,
        budget::get_breakdown
    ),
    components(schemas(
        models::RegisterRequest,
        models::LoginRequest,
        models::UserSummary,
        models::AuthResponse,
        models::Expense,
        models::NewExpense,
        models::ExpenseUpdate,
        models::RecurringCost,
        models::NewRecurringCost,
        models::RecurringCostUpdate,
        models::BudgetSetting,
        models::BudgetSettingUpdate,
        models::SpendingSummary,
        models::DailySpending,
        models::SpendingBreakdown,
        models::HealthResponse,
        models::ServiceInfo,
        crate::error::ErrorBody
    )),
    modifiers(&BearerAuth),
    tags((name = "budgify"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let protected = Router::new()
        .merge(expenses::router())
        .merge(recurring::router())
        .merge(budget::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_jwt));

    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(protected)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
