use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{Room, RoomType, RoomTypeUpdate};
use shared::{AppError, AppResult, ErrorCode};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inventory {
    rooms: Vec<Room>,
    room_types: Vec<RoomType>,
}

/// 房间与房型存储
///
/// 房间内嵌一份房型快照；更新房型时同步刷新所有引用该房型的房间。
#[derive(Debug, Clone)]
pub struct RoomStore {
    inner: Arc<RwLock<Inventory>>,
}

impl RoomStore {
    pub fn new(room_types: Vec<RoomType>, rooms: Vec<Room>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inventory { rooms, room_types })),
        }
    }

    pub fn seeded() -> Self {
        let room_types = super::seed::room_types();
        let rooms = super::seed::rooms(&room_types);
        Self::new(room_types, rooms)
    }

    pub async fn list_rooms(&self) -> Vec<Room> {
        self.inner.read().await.rooms.clone()
    }

    pub async fn find_room(&self, id: i64) -> Option<Room> {
        self.inner
            .read()
            .await
            .rooms
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn list_room_types(&self) -> Vec<RoomType> {
        self.inner.read().await.room_types.clone()
    }

    /// 批量更新房型
    ///
    /// 全部校验通过才写入；任一 id 不存在或数值越界则整体拒绝。
    /// 修改 `base_price` 时，该房型下所有房间的夜价同步为新基价。
    pub async fn update_room_types(&self, updates: Vec<RoomTypeUpdate>) -> AppResult<Vec<RoomType>> {
        let mut inventory = self.inner.write().await;

        for update in &updates {
            if !inventory.room_types.iter().any(|t| t.id == update.id) {
                return Err(AppError::new(ErrorCode::RoomTypeNotFound).with_detail("id", update.id));
            }
            if let Some(price) = update.base_price
                && price < Decimal::ZERO
            {
                return Err(AppError::new(ErrorCode::InvalidPrice).with_detail("id", update.id));
            }
            if let Some(pct) = update.reservation_fee_percentage
                && (pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED)
            {
                return Err(AppError::out_of_range(
                    "reservationFeePercentage",
                    "Reservation fee must be between 0 and 100",
                ));
            }
        }

        for update in updates {
            let Some(room_type) = inventory.room_types.iter_mut().find(|t| t.id == update.id) else {
                continue;
            };
            if let Some(name) = update.name {
                room_type.name = name;
            }
            if let Some(description) = update.description {
                room_type.description = description;
            }
            let price_changed = update.base_price.is_some();
            if let Some(price) = update.base_price {
                room_type.base_price = price;
            }
            if let Some(pct) = update.reservation_fee_percentage {
                room_type.reservation_fee_percentage = pct;
            }

            let snapshot = room_type.clone();
            for room in inventory.rooms.iter_mut().filter(|r| r.room_type.id == snapshot.id) {
                if price_changed {
                    room.price = snapshot.base_price;
                }
                room.room_type = snapshot.clone();
            }
            tracing::info!(room_type_id = snapshot.id, "Room type updated");
        }

        Ok(inventory.room_types.clone())
    }
}
