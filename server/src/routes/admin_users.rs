use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use menu::{AdminUser, Role};

use crate::error::ApiError;
use crate::policy::{Resource, can_manage_user};
use crate::state::AppState;

use super::require;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserList {
    pub items: Vec<AdminUser>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    pub ok: bool,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserList>, ApiError> {
    require(&headers, &state, Resource::Users)?;
    let items = state.store.users();
    let total = items.len();
    Ok(Json(UserList { items, total }))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<AdminUser>, ApiError> {
    let actor = require(&headers, &state, Resource::Users)?;

    if !can_manage_user(actor.role, request.role) {
        return Err(ApiError::Forbidden("Managers can only create Chefs".into()));
    }

    let user = AdminUser {
        id: state.store.next_user_id(),
        full_name: request.full_name,
        email: request.email,
        role: request.role,
        is_active: true,
        created_at_iso: Utc::now().to_rfc3339(),
    };
    state.store.insert_user(user.clone(), request.password);

    Ok(Json(user))
}

pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<ResetPasswordResponse>, ApiError> {
    let actor = require(&headers, &state, Resource::Users)?;

    let target = state.store.user_by_id(&id).ok_or(ApiError::NotFound)?;
    if !can_manage_user(actor.role, target.role) {
        return Err(ApiError::Forbidden("Managers can only reset Chefs".into()));
    }

    Ok(Json(ResetPasswordResponse { ok: true }))
}
