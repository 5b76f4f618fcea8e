//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Credential and registration failures answer 400 rather than 401/409:
    /// the front end treats 401 as "session expired" and would redirect away
    /// from the login form.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::BookingNotFound | Self::RoomNotFound | Self::RoomTypeNotFound => {
                StatusCode::NOT_FOUND
            }

            // 401 Unauthorized
            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
