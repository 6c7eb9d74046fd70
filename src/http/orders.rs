use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::instrument;

use super::{ApiError, AppState};
use crate::domain::{OrderView, Purchase};

/// Places an order and reserves its stock in one call.
#[instrument(skip(state, purchase), fields(plant_id = %purchase.plant_id))]
pub async fn purchase(
    State(state): State<AppState>,
    Json(purchase): Json<Purchase>,
) -> Result<Json<Value>, ApiError> {
    let receipt = state.orders.create_order(purchase).await?;
    Ok(Json(json!({ "insertedId": receipt.order_id, "plant": receipt.plant })))
}

#[instrument(skip(state))]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.orders.cancel_order(id).await?;
    Ok(Json(json!({ "deletedCount": deleted })))
}

#[instrument(skip(state))]
pub async fn my_orders(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    Ok(Json(state.orders.list_orders_for_customer(email).await?))
}

#[instrument(skip(state))]
pub async fn seller_orders(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    Ok(Json(state.orders.list_orders_for_seller(email).await?))
}
