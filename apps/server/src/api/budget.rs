use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use budgify_core::budget::{BudgetMonth, BudgetSettingUpdate as CoreBudgetSettingUpdate};

use super::extract::{ApiJson, ApiPath};
use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{BudgetSetting, BudgetSettingUpdate, SpendingBreakdown, SpendingSummary};

#[utoipa::path(
    get,
    path = "/budget",
    responses((status = 200, body = BudgetSetting), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_budget(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> ApiResult<Json<BudgetSetting>> {
    let setting = state.budget_service.get_budget_setting(&user.user_id)?;
    Ok(Json(setting.into()))
}

#[utoipa::path(
    put,
    path = "/budget",
    request_body = BudgetSettingUpdate,
    responses((status = 200, body = BudgetSetting), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiJson(payload): ApiJson<BudgetSettingUpdate>,
) -> ApiResult<Json<BudgetSetting>> {
    let setting = state
        .budget_service
        .update_budget_setting(
            &user.user_id,
            CoreBudgetSettingUpdate {
                monthly_limit: payload.monthly_limit,
            },
        )
        .await?;
    tracing::info!(user_id = %user.user_id, limit = setting.monthly_limit, "budget updated");
    Ok(Json(setting.into()))
}

#[utoipa::path(
    get,
    path = "/budget/summary/{year}/{month}",
    params(("year" = i32, Path,), ("month" = u32, Path, description = "1-12")),
    responses((status = 200, body = SpendingSummary), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
) -> ApiResult<Json<SpendingSummary>> {
    let month = BudgetMonth::new(year, month)?;
    let summary = state
        .budget_service
        .get_spending_summary(&user.user_id, month)?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    get,
    path = "/budget/breakdown/{year}/{month}",
    params(("year" = i32, Path,), ("month" = u32, Path, description = "1-12")),
    responses((status = 200, body = SpendingBreakdown), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_breakdown(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
) -> ApiResult<Json<SpendingBreakdown>> {
    let month = BudgetMonth::new(year, month)?;
    let breakdown = state
        .budget_service
        .get_spending_breakdown(&user.user_id, month)?;
    Ok(Json(breakdown.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget", get(get_budget).put(update_budget))
        .route("/budget/summary/{year}/{month}", get(get_summary))
        .route("/budget/breakdown/{year}/{month}", get(get_breakdown))
}
