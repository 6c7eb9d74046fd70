use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use super::{ApiError, AppState};
use crate::domain::{Role, User, UserCreate};
use crate::user_actor::UserError;

#[derive(Debug, Deserialize)]
pub struct RoleUpdate {
    role: Role,
}

/// Returns the stored user, creating it as a customer on first contact.
#[instrument(skip(state, profile))]
pub async fn save_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(profile): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    let (user, _created) = state.users.ensure_user(email, profile).await?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn get_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let role = state.users.get_role(email).await?;
    Ok(Json(json!({ "role": role })))
}

/// Seller upgrade request. A repeated request answers 400 with a plain-text body.
#[instrument(skip(state))]
pub async fn request_seller(State(state): State<AppState>, Path(email): Path<String>) -> Response {
    match state.users.request_seller(email).await {
        Ok(user) => Json(user).into_response(),
        Err(UserError::AlreadyRequested(_)) => (
            StatusCode::BAD_REQUEST,
            "You have already requested, wait for some time.",
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[instrument(skip(state, body), fields(role = ?body.role))]
pub async fn update_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<RoleUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.set_role(email, body.role).await?))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list_users().await?))
}
