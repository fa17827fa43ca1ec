//! Identity service: password hashing, bearer token issue and validation.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};
use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::error_response;
use crate::main_lib::AppState;

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: Vec<u8>,
    pub access_token_ttl: Duration,
}

impl AuthConfig {
    /// Uses the configured secret, or a random one that dies with the process.
    pub fn from_secret(raw: Option<&str>, access_token_ttl: Duration) -> anyhow::Result<Self> {
        let jwt_secret = match raw {
            Some(raw) => decode_secret_key(raw)?,
            None => {
                tracing::warn!(
                    "BUDGIFY_JWT_SECRET is not set; using a random key, tokens will not survive a restart"
                );
                let mut bytes = vec![0u8; 32];
                rand::rngs::OsRng.fill_bytes(&mut bytes);
                bytes
            }
        };
        Ok(Self {
            jwt_secret,
            access_token_ttl,
        })
    }
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    /// Verified against when the email is unknown so both failure paths cost the same.
    dummy_hash: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: usize,
    iat: usize,
}

/// Identity attached to a request by [`require_jwt`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl AuthManager {
    pub fn new(config: &AuthConfig) -> anyhow::Result<Self> {
        let encoding_key = EncodingKey::from_secret(&config.jwt_secret);
        let decoding_key = DecodingKey::from_secret(&config.jwt_secret);
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        let dummy_hash = hash_with_default_params("budgify-dummy-password")
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
            token_ttl: config.access_token_ttl,
            dummy_hash,
        })
    }

    /// CPU heavy; call from a blocking task.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        hash_with_default_params(password)
    }

    /// CPU heavy; call from a blocking task. `None` verifies against the dummy hash
    /// and always fails.
    pub fn verify_password(&self, stored_hash: Option<&str>, candidate: &str) -> Result<(), AuthError> {
        let (hash, known) = match stored_hash {
            Some(hash) => (hash, true),
            None => (self.dummy_hash.as_str(), false),
        };
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {e}")))?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => AuthError::InvalidCredentials,
                other => AuthError::Internal(format!("Password verification failed: {other}")),
            })?;
        if known {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn issue_token(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::Internal("System clock is before UNIX_EPOCH".into()))?;
        let exp = now + self.token_ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.as_secs() as usize,
            exp: exp.as_secs() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| AuthenticatedUser {
                user_id: data.claims.sub,
                email: data.claims.email,
            })
            .map_err(|err| {
                tracing::debug!("Rejected bearer token: {err}");
                AuthError::Unauthorized
            })
    }

    pub fn expires_in(&self) -> Duration {
        self.token_ttl
    }
}

fn hash_with_default_params(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("Failed to hash password: {e}")))
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized | AuthError::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            AuthError::Internal(msg) => {
                tracing::error!(error = %msg, "authentication failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) if bytes.len() == 32 => bytes,
        _ if trimmed.len() == 32 => trimmed.as_bytes().to_vec(),
        Ok(_) => anyhow::bail!("JWT secret must decode to exactly 32 bytes"),
        Err(_) => {
            anyhow::bail!("JWT secret must be base64 encoded or a 32-byte ASCII string")
        }
    };
    Ok(decoded)
}

pub async fn require_jwt(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthorized)?;

    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return Err(AuthError::Unauthorized);
    };

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::Unauthorized);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    let user = state.auth.validate_token(token)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::Unauthorized)
    }
}
