use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};

use menu::{MaintenanceSettings, TimeSettings};

use crate::error::ApiError;
use crate::policy::Resource;
use crate::state::AppState;

use super::require;

pub async fn get_time(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<TimeSettings>, ApiError> {
    require(&headers, &state, Resource::Settings)?;
    Ok(Json(state.store.time_settings()))
}

/// The night shift may wrap past midnight; the order window and day shift
/// may not.
pub async fn put_time(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(settings): Json<TimeSettings>,
) -> Result<Json<TimeSettings>, ApiError> {
    require(&headers, &state, Resource::Settings)?;

    if settings.order_window_from > settings.order_window_to {
        return Err(ApiError::BadRequest(
            "Order window start must not be after its end".into(),
        ));
    }
    if settings.day_shift_from > settings.day_shift_to {
        return Err(ApiError::BadRequest(
            "Day shift start must not be after its end".into(),
        ));
    }

    state.store.set_time_settings(settings);
    Ok(Json(settings))
}

pub async fn get_maintenance(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MaintenanceSettings>, ApiError> {
    require(&headers, &state, Resource::Settings)?;
    Ok(Json(state.store.maintenance()))
}

pub async fn put_maintenance(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(settings): Json<MaintenanceSettings>,
) -> Result<Json<MaintenanceSettings>, ApiError> {
    require(&headers, &state, Resource::Settings)?;
    state.store.set_maintenance(settings.clone());
    Ok(Json(settings))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPdfResponse {
    pub pdf_url: String,
}

/// Simulated generation of the printable QR sheet.
pub async fn qr_pdf(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<QrPdfResponse>, ApiError> {
    require(&headers, &state, Resource::Qr)?;
    Ok(Json(QrPdfResponse {
        pdf_url: "/files/qr/latest.pdf".into(),
    }))
}
