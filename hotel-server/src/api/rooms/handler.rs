//! Rooms Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use shared::models::Room;
use shared::{AppError, AppResult};

/// GET /api/rooms - 获取所有房间
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Room>> {
    Json(state.rooms.list_rooms().await)
}

/// GET /api/rooms/:id - 获取单个房间
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    state
        .rooms
        .find_room(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::room_not_found(id))
}
