//! Room Types Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::{RoomType, RoomTypeUpdate};

/// GET /api/room-types - 获取所有房型
pub async fn list(State(state): State<ServerState>) -> Json<Vec<RoomType>> {
    Json(state.rooms.list_room_types().await)
}

/// PUT /api/room-types - 批量更新房型 (价格、预订费比例等)
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<Vec<RoomTypeUpdate>>,
) -> AppResult<Json<Vec<RoomType>>> {
    let room_types = state.rooms.update_room_types(payload).await?;
    Ok(Json(room_types))
}
