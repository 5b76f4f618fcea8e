//! Reservation Fee Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppResult;
use shared::models::ReservationFee;

/// GET /api/reservation-fee
pub async fn get(State(state): State<ServerState>) -> Json<ReservationFee> {
    Json(state.fees.get().await)
}

/// PUT /api/reservation-fee - 设置全局比例 (0..=100)
pub async fn set(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationFee>,
) -> AppResult<Json<ReservationFee>> {
    let fee = state.fees.set(payload).await?;
    Ok(Json(fee))
}
