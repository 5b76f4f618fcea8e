//! Reservation Fee Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Global reservation fee, in percent (0..=100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFee {
    pub percentage: Decimal,
}

impl ReservationFee {
    /// Whether the percentage lies in 0..=100
    pub fn is_valid(&self) -> bool {
        self.percentage >= Decimal::ZERO && self.percentage <= Decimal::ONE_HUNDRED
    }
}

impl Default for ReservationFee {
    fn default() -> Self {
        Self {
            percentage: Decimal::TEN,
        }
    }
}
