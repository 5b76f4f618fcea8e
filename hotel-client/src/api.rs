//! Typed wrappers over the hotel REST API

use shared::ApiResponse;
use shared::models::{
    AuthenticateRequest, AuthenticateResponse, Booking, BookingCreate, BookingUpdate,
    PaymentConfirmation, PaymentConfirmationRequest, RegisterRequest, ReservationFee, Room,
    RoomType, RoomTypeUpdate,
};

use crate::ClientResult;
use crate::http::HttpClient;

/// Front-desk API
#[derive(Debug, Clone)]
pub struct HotelApi<C> {
    http: C,
}

impl<C: HttpClient> HotelApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    // ========== Accounts ==========

    /// Log in and store the returned token
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthenticateResponse> {
        let req = AuthenticateRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: AuthenticateResponse = self.http.post("/api/accounts/authenticate", &req).await?;
        self.http.session().save_token(&resp.jwt_token);
        tracing::info!(username = %resp.account.username, "Logged in");
        Ok(resp)
    }

    /// Forget the stored token (the server keeps no session)
    pub fn logout(&self) {
        self.http.session().clear_token();
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.session().token().is_some()
    }

    /// Returns the server's confirmation message
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<String> {
        let resp: ApiResponse<()> = self.http.post("/api/accounts/register", req).await?;
        Ok(resp.message)
    }

    // ========== Rooms ==========

    pub async fn rooms(&self) -> ClientResult<Vec<Room>> {
        self.http.get("/api/rooms").await
    }

    pub async fn room_types(&self) -> ClientResult<Vec<RoomType>> {
        self.http.get("/api/room-types").await
    }

    pub async fn update_room_types(&self, updates: &[RoomTypeUpdate]) -> ClientResult<Vec<RoomType>> {
        self.http.put("/api/room-types", &updates).await
    }

    pub async fn reservation_fee(&self) -> ClientResult<ReservationFee> {
        self.http.get("/api/reservation-fee").await
    }

    pub async fn set_reservation_fee(&self, fee: ReservationFee) -> ClientResult<ReservationFee> {
        self.http.put("/api/reservation-fee", &fee).await
    }

    // ========== Bookings ==========

    pub async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        self.http.get("/api/bookings").await
    }

    pub async fn create_booking(&self, booking: &BookingCreate) -> ClientResult<Booking> {
        self.http.post("/api/bookings", booking).await
    }

    pub async fn update_booking(&self, id: i64, update: &BookingUpdate) -> ClientResult<Booking> {
        self.http.put(&format!("/api/bookings/{}", id), update).await
    }

    pub async fn delete_booking(&self, id: i64) -> ClientResult<Booking> {
        self.http.delete(&format!("/api/bookings/{}", id)).await
    }

    pub async fn send_payment_confirmation(
        &self,
        booking_id: i64,
        email: Option<String>,
    ) -> ClientResult<PaymentConfirmation> {
        let req = PaymentConfirmationRequest { booking_id, email };
        self.http
            .post("/api/bookings/send-payment-confirmation", &req)
            .await
    }
}
