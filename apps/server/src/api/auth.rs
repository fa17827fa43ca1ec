use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use budgify_core::users::{NewUser, User};

use super::extract::ApiJson;
use crate::auth::{AuthError, AuthManager};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

/// Runs a CPU heavy password operation off the async workers.
async fn blocking<T, F>(auth: &Arc<AuthManager>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AuthManager) -> Result<T, AuthError> + Send + 'static,
{
    let auth = auth.clone();
    tokio::task::spawn_blocking(move || f(auth.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("password task failed: {e}")))?
        .map_err(ApiError::from)
}

fn auth_response(state: &AppState, message: &str, user: User) -> ApiResult<AuthResponse> {
    let token = state.auth.issue_token(&user.id, &user.email)?;
    Ok(AuthResponse {
        message: message.to_string(),
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.expires_in().as_secs(),
        user: user.into(),
    })
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, body = crate::error::ErrorBody),
        (status = 409, body = crate::error::ErrorBody)
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    // Reject bad input before paying for an argon2 hash.
    NewUser::validate_registration(&payload.username, &payload.email, &payload.password)?;

    let password = payload.password;
    let password_hash = blocking(&state.auth, move |auth| auth.hash_password(&password)).await?;

    let user = state
        .user_service
        .register(NewUser {
            username: payload.username,
            email: payload.email,
            password_hash,
        })
        .await?;
    tracing::info!(user_id = %user.id, "user registered");

    let body = auth_response(&state, "User created successfully", user)?;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, body = crate::error::ErrorBody)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let credentials = state.user_service.find_credentials_by_email(&payload.email)?;

    let stored_hash = credentials.as_ref().map(|c| c.password_hash.clone());
    let password = payload.password;
    blocking(&state.auth, move |auth| {
        auth.verify_password(stored_hash.as_deref(), &password)
    })
    .await?;

    // verify_password only succeeds for a known user
    let user = credentials
        .map(|c| c.user)
        .ok_or(ApiError::Auth(AuthError::InvalidCredentials))?;

    Ok(Json(auth_response(&state, "Login successful", user)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
