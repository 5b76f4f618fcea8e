//! Stay pricing
//!
//! The reservation fee is the share of the stay total collected when the
//! booking is made; the rest is due at the desk.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Availability, Room};

/// Price breakdown for a stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: i64,
    pub nightly: Decimal,
    pub subtotal: Decimal,
    pub reservation_fee: Decimal,
    pub balance_due: Decimal,
}

/// Fee percentage charged for `room`
///
/// The room type's own percentage wins; a room type at zero takes the
/// global percentage.
pub fn fee_percentage(room: &Room, global: Decimal) -> Decimal {
    let own = room.room_type.reservation_fee_percentage;
    if own > Decimal::ZERO { own } else { global }
}

/// Price a stay in `room` at `fee_percentage` (0..=100)
pub fn quote(room: &Room, availability: &Availability, fee_percentage: Decimal) -> Quote {
    let nights = availability.nights();
    let subtotal = (room.price * Decimal::from(nights)).round_dp(2);
    let reservation_fee = (subtotal * fee_percentage / Decimal::ONE_HUNDRED).round_dp(2);
    Quote {
        nights,
        nightly: room.price,
        subtotal,
        reservation_fee,
        balance_due: subtotal - reservation_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;
    use chrono::NaiveDate;

    #[test]
    fn test_room_type_fee_wins_over_global() {
        let mut r = room(Decimal::new(120, 0));
        r.room_type.reservation_fee_percentage = Decimal::new(15, 0);
        assert_eq!(fee_percentage(&r, Decimal::TEN), Decimal::new(15, 0));

        r.room_type.reservation_fee_percentage = Decimal::ZERO;
        assert_eq!(fee_percentage(&r, Decimal::TEN), Decimal::TEN);
    }

    fn room(price: Decimal) -> Room {
        Room {
            id: 1,
            room_number: "101".to_string(),
            room_type: RoomType {
                id: 1,
                name: "Standard".to_string(),
                description: String::new(),
                base_price: price,
                reservation_fee_percentage: Decimal::TEN,
            },
            price,
            is_available: true,
        }
    }

    fn stay(nights: u32) -> Availability {
        let check_in = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        Availability {
            check_in,
            check_out: check_in + chrono::Duration::days(nights as i64),
            adults: 1,
            children: 0,
            extra_requests: None,
        }
    }

    #[test]
    fn test_quote_three_nights() {
        let q = quote(&room(Decimal::new(8950, 2)), &stay(3), Decimal::TEN);
        assert_eq!(q.nights, 3);
        assert_eq!(q.subtotal, Decimal::new(26850, 2));
        assert_eq!(q.reservation_fee, Decimal::new(2685, 2));
        assert_eq!(q.balance_due, Decimal::new(24165, 2));
    }

    #[test]
    fn test_quote_rounds_fee_to_cents() {
        let q = quote(&room(Decimal::new(3333, 2)), &stay(1), Decimal::new(15, 0));
        // 33.33 * 15% = 4.9995
        assert_eq!(q.reservation_fee, Decimal::new(500, 2));
    }

    #[test]
    fn test_zero_fee() {
        let q = quote(&room(Decimal::ONE_HUNDRED), &stay(2), Decimal::ZERO);
        assert_eq!(q.reservation_fee, Decimal::ZERO);
        assert_eq!(q.balance_due, q.subtotal);
    }
}
