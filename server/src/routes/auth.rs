use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};

use menu::AdminUser;

use crate::auth::{authenticate, issue_token};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store
        .user_by_credentials(&request.email, &request.password)
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(LoginResponse {
        access_token: issue_token(&user.id),
    }))
}

/// The password never leaves the store; [`AdminUser`] has no such field.
pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<AdminUser>, ApiError> {
    let user = authenticate(&headers, &state.store)?;
    Ok(Json(user))
}
