//! Booking Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, ErrorCode};

/// Guest sub-record embedded in a booking
///
/// Not a standalone entity: the same person appears once per booking and
/// is only grouped by email string on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
}

/// Requested stay window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_requests: Option<String>,
}

impl Availability {
    /// Number of nights between check-in and check-out (0 if inverted)
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Check-out must fall strictly after check-in
    pub fn ensure_ordered(&self) -> Result<(), AppError> {
        if self.check_out <= self.check_in {
            return Err(AppError::new(ErrorCode::InvalidStayDates)
                .with_detail("checkIn", self.check_in.to_string())
                .with_detail("checkOut", self.check_out.to_string()));
        }
        Ok(())
    }
}

/// Payment sub-record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub reservation_fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Unix millis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<i64>,
}

/// Booking entity
///
/// `room_id` may point at a room that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub room_id: i64,
    pub guest: Guest,
    pub availability: Availability,
    #[serde(default)]
    pub payment: Payment,
    /// Payment confirmed
    #[serde(default)]
    pub pay_status: bool,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub room_id: i64,
    #[validate(nested)]
    pub guest: Guest,
    #[validate(nested)]
    pub availability: Availability,
    #[serde(default)]
    pub payment: Option<Payment>,
    #[serde(default)]
    pub pay_status: bool,
}

impl BookingCreate {
    /// Field validation plus stay ordering
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        self.availability.ensure_ordered()
    }
}

/// Update booking payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub room_id: Option<i64>,
    pub guest: Option<Guest>,
    pub availability: Option<Availability>,
    pub payment: Option<Payment>,
    pub pay_status: Option<bool>,
}

impl BookingUpdate {
    /// Validate the parts that are present
    pub fn check(&self) -> Result<(), AppError> {
        if let Some(guest) = &self.guest {
            guest.validate()?;
        }
        if let Some(availability) = &self.availability {
            availability.validate()?;
            availability.ensure_ordered()?;
        }
        Ok(())
    }

    /// Apply present fields onto an existing booking
    pub fn apply_to(self, booking: &mut Booking) {
        if let Some(room_id) = self.room_id {
            booking.room_id = room_id;
        }
        if let Some(guest) = self.guest {
            booking.guest = guest;
        }
        if let Some(availability) = self.availability {
            booking.availability = availability;
        }
        if let Some(payment) = self.payment {
            booking.payment = payment;
        }
        if let Some(pay_status) = self.pay_status {
            booking.pay_status = pay_status;
        }
    }
}

/// Payment confirmation request (POST /api/bookings/send-payment-confirmation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmationRequest {
    pub booking_id: i64,
    /// Override recipient; defaults to the guest email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Record of a sent payment confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub booking_id: i64,
    pub email: String,
    pub amount: Decimal,
    /// Unix millis
    pub sent_at: i64,
}
