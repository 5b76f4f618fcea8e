//! Room Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room type entity: a category of rooms sharing a price and description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: i64,
    /// Display name (e.g. "Deluxe Double")
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    /// Reservation fee charged up front, in percent of the stay total
    pub reservation_fee_percentage: Decimal,
}

/// Room entity
///
/// `is_available` is the room's own flag. It is maintained independently of
/// bookings and may disagree with the occupancy derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub room_type: RoomType,
    /// Nightly price
    pub price: Decimal,
    pub is_available: bool,
}

/// Update room type payload (PUT /api/room-types)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<Decimal>,
    pub reservation_fee_percentage: Option<Decimal>,
}
