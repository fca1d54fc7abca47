use axum::http::HeaderMap;

use menu::AdminUser;

use crate::error::ApiError;
use crate::policy::{Resource, can_access};
use crate::state::AppState;

pub mod admin_catalog;
pub mod admin_settings;
pub mod admin_users;
pub mod auth;
pub mod orders;
pub mod public;

/// Bearer auth plus the policy check every admin handler starts with.
fn require(headers: &HeaderMap, state: &AppState, resource: Resource) -> Result<AdminUser, ApiError> {
    let user = crate::auth::authenticate(headers, &state.store)?;
    if !can_access(user.role, resource) {
        return Err(ApiError::Forbidden("Access denied".into()));
    }
    Ok(user)
}
