use std::sync::Arc;

use shared::AppError;
use shared::models::ReservationFee;
use tokio::sync::RwLock;

/// 全局预订费比例
#[derive(Debug, Clone, Default)]
pub struct FeeStore {
    fee: Arc<RwLock<ReservationFee>>,
}

impl FeeStore {
    pub fn new(fee: ReservationFee) -> Self {
        Self {
            fee: Arc::new(RwLock::new(fee)),
        }
    }

    pub async fn get(&self) -> ReservationFee {
        *self.fee.read().await
    }

    pub async fn set(&self, fee: ReservationFee) -> Result<ReservationFee, AppError> {
        if !fee.is_valid() {
            return Err(AppError::out_of_range(
                "percentage",
                "Reservation fee must be between 0 and 100",
            ));
        }
        *self.fee.write().await = fee;
        tracing::info!(percentage = %fee.percentage, "Reservation fee updated");
        Ok(fee)
    }
}
