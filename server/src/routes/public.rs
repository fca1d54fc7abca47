use std::sync::Arc;

use axum::{Json, extract::State};

use menu::{Extra, Ingredient, OrderWindows, ReferenceItem, ServiceStatus, SpecialSandwich};

use crate::state::AppState;

/// Closed (with the configured message) while maintenance mode is on.
pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let maintenance = state.store.maintenance();
    Json(ServiceStatus {
        is_open: !maintenance.is_enabled,
        message: maintenance.is_enabled.then(|| {
            maintenance
                .message
                .unwrap_or_else(|| "Service is under maintenance".to_string())
        }),
    })
}

pub async fn order_windows(State(state): State<Arc<AppState>>) -> Json<OrderWindows> {
    Json(state.store.order_windows())
}

pub async fn departments(State(state): State<Arc<AppState>>) -> Json<Vec<ReferenceItem>> {
    Json(state.store.departments.clone())
}

pub async fn wings(State(state): State<Arc<AppState>>) -> Json<Vec<ReferenceItem>> {
    Json(state.store.wings.clone())
}

pub async fn special_sandwiches(State(state): State<Arc<AppState>>) -> Json<Vec<SpecialSandwich>> {
    Json(state.store.active_specials())
}

pub async fn ingredients(State(state): State<Arc<AppState>>) -> Json<Vec<Ingredient>> {
    Json(state.store.active_ingredients())
}

pub async fn extras(State(state): State<Arc<AppState>>) -> Json<Vec<Extra>> {
    Json(state.store.active_extras())
}
