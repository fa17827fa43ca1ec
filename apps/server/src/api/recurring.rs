use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::extract::{ApiJson, ApiPath};
use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{NewRecurringCost, RecurringCost, RecurringCostUpdate};

#[utoipa::path(get, path = "/recurring", responses((status = 200, body = [RecurringCost])), security(("bearer" = [])))]
pub async fn list_recurring_costs(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<RecurringCost>>> {
    let costs = state.recurring_service.get_recurring_costs(&user.user_id)?;
    Ok(Json(costs.into_iter().map(RecurringCost::from).collect()))
}

#[utoipa::path(
    get,
    path = "/recurring/{id}",
    responses((status = 200, body = RecurringCost), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_recurring_cost(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<RecurringCost>> {
    let cost = state.recurring_service.get_recurring_cost(&user.user_id, &id)?;
    Ok(Json(RecurringCost::from(cost)))
}

#[utoipa::path(
    post,
    path = "/recurring",
    request_body = NewRecurringCost,
    responses((status = 201, body = RecurringCost), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create_recurring_cost(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiJson(payload): ApiJson<NewRecurringCost>,
) -> ApiResult<(StatusCode, Json<RecurringCost>)> {
    let created = state
        .recurring_service
        .create_recurring_cost(&user.user_id, payload.try_into()?)
        .await?;
    Ok((StatusCode::CREATED, Json(RecurringCost::from(created))))
}

#[utoipa::path(
    put,
    path = "/recurring/{id}",
    request_body = RecurringCostUpdate,
    responses(
        (status = 200, body = RecurringCost),
        (status = 400, body = crate::error::ErrorBody),
        (status = 404, body = crate::error::ErrorBody)
    ),
    security(("bearer" = []))
)]
pub async fn update_recurring_cost(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<RecurringCostUpdate>,
) -> ApiResult<Json<RecurringCost>> {
    let updated = state
        .recurring_service
        .update_recurring_cost(&user.user_id, &id, payload.try_into()?)
        .await?;
    Ok(Json(RecurringCost::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/recurring/{id}",
    responses((status = 204), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn delete_recurring_cost(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state
        .recurring_service
        .delete_recurring_cost(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/recurring",
            get(list_recurring_costs).post(create_recurring_cost),
        )
        .route(
            "/recurring/{id}",
            get(get_recurring_cost)
                .put(update_recurring_cost)
                .delete(delete_recurring_cost),
        )
}
