use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use menu::OrderStatus;
use order::{OrderDraft, validate};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatus,
}

/// Validates the submitted draft against the current windows and active
/// ingredient list; the full aggregated error list comes back as a 422.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<OrderDraft>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let maintenance = state.store.maintenance();
    if maintenance.is_enabled {
        return Err(ApiError::Maintenance(maintenance.message));
    }

    let windows = state.store.order_windows();
    let ingredients = state.store.active_ingredients();
    let payload = validate(&draft, &windows, &ingredients)?;

    let order_id = state.store.create_order(payload);
    info!("Order {order_id} accepted, sent to print");

    Ok(Json(CreateOrderResponse {
        order_id,
        status: OrderStatus::SentToPrint,
    }))
}

pub async fn order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderStatusResponse>, ApiError> {
    let status = state.store.poll_status(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(OrderStatusResponse { status }))
}
