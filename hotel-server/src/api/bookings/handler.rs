//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use shared::models::{
    Booking, BookingCreate, BookingUpdate, Payment, PaymentConfirmation,
    PaymentConfirmationRequest,
};
use shared::pricing::{fee_percentage, quote};
use shared::util::now_millis;
use shared::{AppError, AppResult};

/// GET /api/bookings - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Booking>> {
    Json(state.bookings.list().await)
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    state
        .bookings
        .find(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::booking_not_found(id))
}

/// POST /api/bookings - 创建预订
///
/// 客户端未填写金额时，按房间夜价与房型预订费比例计算；房型比例为 0 时使用全局比例。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    payload.check()?;

    let room = state
        .rooms
        .find_room(payload.room_id)
        .await
        .ok_or_else(|| AppError::room_not_found(payload.room_id))?;

    let mut payment = payload.payment.clone().unwrap_or_default();
    if payment.amount == Decimal::ZERO {
        let global = state.fees.get().await;
        let q = quote(
            &room,
            &payload.availability,
            fee_percentage(&room, global.percentage),
        );
        payment = Payment {
            amount: q.subtotal,
            reservation_fee: q.reservation_fee,
            ..payment
        };
    }

    let booking = state.bookings.insert(payload, payment).await;
    tracing::info!(
        booking_id = booking.id,
        room_id = booking.room_id,
        amount = %booking.payment.amount,
        "Booking created"
    );
    Ok(Json(booking))
}

/// PUT /api/bookings/:id - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    payload.check()?;
    let booking = state.bookings.update(id, payload).await?;
    tracing::info!(booking_id = id, "Booking updated");
    Ok(Json(booking))
}

/// DELETE /api/bookings/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = state.bookings.delete(id).await?;
    tracing::info!(booking_id = id, "Booking deleted");
    Ok(Json(booking))
}

/// POST /api/bookings/send-payment-confirmation
///
/// 标记预订已付款，并向客人邮箱 (或请求中指定的邮箱) 发送确认。
pub async fn send_payment_confirmation(
    State(state): State<ServerState>,
    Json(req): Json<PaymentConfirmationRequest>,
) -> AppResult<Json<PaymentConfirmation>> {
    let now = now_millis();
    let booking = state.bookings.mark_paid(req.booking_id, now).await?;

    let confirmation = PaymentConfirmation {
        booking_id: booking.id,
        email: req.email.unwrap_or_else(|| booking.guest.email.clone()),
        amount: booking.payment.amount,
        sent_at: now,
    };
    state.notifier.send(confirmation.clone()).await;
    Ok(Json(confirmation))
}
