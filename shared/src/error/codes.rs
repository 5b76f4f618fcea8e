//! Unified error codes for the hotel front desk
//!
//! This module defines all error codes used across hotel-server and hotel-client.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Booking errors
//! - 6xxx: Room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Email is already registered
    EmailAlreadyRegistered = 1008,

    // ==================== 4xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 4001,
    /// Check-out is not after check-in
    InvalidStayDates = 4003,

    // ==================== 6xxx: Room ====================
    /// Room not found
    RoomNotFound = 6001,
    /// Room type not found
    RoomTypeNotFound = 6101,
    /// Price is negative or otherwise unusable
    InvalidPrice = 6102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Email or password is incorrect",
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidStayDates => "Check-out must be after check-in",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomTypeNotFound => "Room type not found",
            ErrorCode::InvalidPrice => "Price is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1008 => Ok(ErrorCode::EmailAlreadyRegistered),

            // Booking
            4001 => Ok(ErrorCode::BookingNotFound),
            4003 => Ok(ErrorCode::InvalidStayDates),

            // Room
            6001 => Ok(ErrorCode::RoomNotFound),
            6101 => Ok(ErrorCode::RoomTypeNotFound),
            6102 => Ok(ErrorCode::InvalidPrice),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
