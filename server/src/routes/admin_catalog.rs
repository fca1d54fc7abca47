//! Catalog CRUD for the admin console. Creation assigns server-side ids,
//! PATCH is a partial update, DELETE is idempotent (deleting a missing row
//! still reports success, matching the public contract).

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::{Deserialize, Serialize};

use menu::{Extra, Ingredient, IngredientCategory, SpecialSandwich};

use crate::error::ApiError;
use crate::policy::Resource;
use crate::state::AppState;

use super::require;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// --- special sandwiches ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpecial {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn list_specials(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<SpecialSandwich>>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    Ok(Json(state.store.all_specials()))
}

pub async fn create_special(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewSpecial>,
) -> Result<Json<SpecialSandwich>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    let item = state.store.insert_special(SpecialSandwich {
        id: String::new(),
        name: body.name,
        description: body.description,
        is_active: body.is_active,
    });
    Ok(Json(item))
}

pub async fn update_special(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<SpecialPatch>,
) -> Result<Json<SpecialSandwich>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state
        .store
        .update_special(&id, |item| {
            if let Some(name) = patch.name {
                item.name = name;
            }
            if let Some(description) = patch.description {
                item.description = description;
            }
            if let Some(is_active) = patch.is_active {
                item.is_active = is_active;
            }
        })
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_special(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state.store.delete_special(&id);
    Ok(Json(DeleteResponse { success: true }))
}

// --- ingredients ---

#[derive(Debug, Deserialize)]
pub struct IngredientFilter {
    pub query: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredient {
    pub name: String,
    pub category: IngredientCategory,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub category: Option<IngredientCategory>,
    pub is_active: Option<bool>,
}

/// `category=ALL` (or none) lists everything; `query` is a case-insensitive
/// name substring.
pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(filter): Query<IngredientFilter>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;

    let mut items = state.store.all_ingredients();

    if let Some(category) = filter.category.as_deref()
        && category != "ALL"
    {
        items.retain(|i| i.category.as_str() == category);
    }
    if let Some(query) = filter.query.as_deref() {
        let query = query.to_lowercase();
        items.retain(|i| i.name.to_lowercase().contains(&query));
    }

    Ok(Json(items))
}

pub async fn create_ingredient(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewIngredient>,
) -> Result<Json<Ingredient>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    let item = state.store.insert_ingredient(Ingredient {
        id: String::new(),
        name: body.name,
        category: body.category,
        is_active: body.is_active,
    });
    Ok(Json(item))
}

pub async fn update_ingredient(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<IngredientPatch>,
) -> Result<Json<Ingredient>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state
        .store
        .update_ingredient(&id, |item| {
            if let Some(name) = patch.name {
                item.name = name;
            }
            if let Some(category) = patch.category {
                item.category = category;
            }
            if let Some(is_active) = patch.is_active {
                item.is_active = is_active;
            }
        })
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_ingredient(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state.store.delete_ingredient(&id);
    Ok(Json(DeleteResponse { success: true }))
}

// --- extras ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExtra {
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPatch {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn list_extras(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Extra>>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    Ok(Json(state.store.all_extras()))
}

pub async fn create_extra(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NewExtra>,
) -> Result<Json<Extra>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    let item = state.store.insert_extra(Extra {
        id: String::new(),
        name: body.name,
        is_active: body.is_active,
    });
    Ok(Json(item))
}

pub async fn update_extra(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<ExtraPatch>,
) -> Result<Json<Extra>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state
        .store
        .update_extra(&id, |item| {
            if let Some(name) = patch.name {
                item.name = name;
            }
            if let Some(is_active) = patch.is_active {
                item.is_active = is_active;
            }
        })
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_extra(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    require(&headers, &state, Resource::Catalog)?;
    state.store.delete_extra(&id);
    Ok(Json(DeleteResponse { success: true }))
}

fn default_active() -> bool {
    true
}
