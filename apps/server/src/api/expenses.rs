use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{DateRangeQuery, Expense, ExpenseUpdate, NewExpense};

#[utoipa::path(get, path = "/expenses", responses((status = 200, body = [Expense])), security(("bearer" = [])))]
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.get_expenses(&user.user_id)?;
    Ok(Json(expenses.into_iter().map(Expense::from).collect()))
}

#[utoipa::path(
    get,
    path = "/expenses/range",
    params(DateRangeQuery),
    responses((status = 200, body = [Expense]), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn list_expenses_in_range(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiQuery(range): ApiQuery<DateRangeQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state.expense_service.get_expenses_in_range(
        &user.user_id,
        range.start_date,
        range.end_date,
    )?;
    Ok(Json(expenses.into_iter().map(Expense::from).collect()))
}

#[utoipa::path(
    get,
    path = "/expenses/{id}",
    responses((status = 200, body = Expense), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.get_expense(&user.user_id, &id)?;
    Ok(Json(Expense::from(expense)))
}

#[utoipa::path(
    post,
    path = "/expenses",
    request_body = NewExpense,
    responses((status = 201, body = Expense), (status = 400, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiJson(payload): ApiJson<NewExpense>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let created = state
        .expense_service
        .create_expense(&user.user_id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(Expense::from(created))))
}

#[utoipa::path(
    put,
    path = "/expenses/{id}",
    request_body = ExpenseUpdate,
    responses((status = 200, body = Expense), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<ExpenseUpdate>,
) -> ApiResult<Json<Expense>> {
    let updated = state
        .expense_service
        .update_expense(&user.user_id, &id, payload.into())
        .await?;
    Ok(Json(Expense::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/expenses/{id}",
    responses((status = 204), (status = 404, body = crate::error::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state
        .expense_service
        .delete_expense(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/range", get(list_expenses_in_range))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}
