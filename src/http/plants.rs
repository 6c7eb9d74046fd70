use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use super::{ApiError, AppState};
use crate::domain::{Plant, PlantCreate, PlantPatch};
use crate::plant_actor::Direction;

#[derive(Debug, Deserialize)]
pub struct PlantFilter {
    seller: Option<String>,
}

/// Body of `PATCH /plants/quantity/:id`. Any `status` other than
/// `"increase"` (including none) means decrease.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    quantity_to_update: u32,
    #[serde(default)]
    status: Option<String>,
}

impl QuantityUpdate {
    fn direction(&self) -> Direction {
        match self.status.as_deref() {
            Some("increase") => Direction::Increase,
            _ => Direction::Decrease,
        }
    }
}

#[instrument(skip(state, plant))]
pub async fn add_plant(
    State(state): State<AppState>,
    Json(plant): Json<PlantCreate>,
) -> Result<Json<Value>, ApiError> {
    let id = state.plants.create_plant(plant).await?;
    Ok(Json(json!({ "insertedId": id })))
}

#[instrument(skip(state))]
pub async fn list_plants(
    State(state): State<AppState>,
    Query(filter): Query<PlantFilter>,
) -> Result<Json<Vec<Plant>>, ApiError> {
    let plants = match filter.seller {
        Some(email) => state.plants.list_plants_by_seller(email).await?,
        None => state.plants.list_plants().await?,
    };
    Ok(Json(plants))
}

#[instrument(skip(state))]
pub async fn plant_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Plant>, ApiError> {
    state
        .plants
        .get_plant(id.clone())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Plant not found: {}", id)))
}

#[instrument(skip(state, patch))]
pub async fn update_plant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PlantPatch>,
) -> Result<Json<Plant>, ApiError> {
    Ok(Json(state.plants.update_plant(id, patch).await?))
}

#[instrument(skip(state))]
pub async fn delete_plant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.plants.delete_plant(id).await?;
    Ok(Json(json!({ "deletedCount": u64::from(removed.is_some()) })))
}

#[instrument(skip(state))]
pub async fn stock_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let quantity = state.plants.check_stock(id).await?;
    Ok(Json(json!({ "quantity": quantity })))
}

#[instrument(skip(state, body), fields(delta = body.quantity_to_update))]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<QuantityUpdate>,
) -> Result<Json<Plant>, ApiError> {
    let direction = body.direction();
    let plant = state
        .plants
        .adjust_quantity(id, body.quantity_to_update, direction)
        .await?;
    Ok(Json(plant))
}
