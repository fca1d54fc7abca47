//! Simulated bearer auth. The access token is just the base64 of
//! `{"id": userId}`: enough to exercise the role gates without any real
//! cryptography, which stays out of scope.

use axum::http::HeaderMap;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use menu::AdminUser;

use crate::error::ApiError;
use crate::store::Store;

#[derive(Serialize, Deserialize)]
struct TokenPayload {
    id: String,
}

pub fn issue_token(user_id: &str) -> String {
    let payload = TokenPayload {
        id: user_id.to_string(),
    };
    STANDARD.encode(serde_json::to_vec(&payload).expect("token payload serializes"))
}

fn user_id_from_token(token: &str) -> Option<String> {
    let bytes = STANDARD.decode(token).ok()?;
    let payload: TokenPayload = serde_json::from_slice(&bytes).ok()?;
    Some(payload.id)
}

/// Resolves the bearer token to a stored user. Missing, garbled, or
/// unknown-id tokens all come back as 401.
pub fn authenticate(headers: &HeaderMap, store: &Store) -> Result<AdminUser, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let token = header.strip_prefix("Bearer ").ok_or(ApiError::Unauthorized)?;
    let user_id = user_id_from_token(token).ok_or(ApiError::Unauthorized)?;

    store.user_by_id(&user_id).ok_or(ApiError::Unauthorized)
}
