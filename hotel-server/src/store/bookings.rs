use std::sync::Arc;

use shared::models::{Booking, BookingCreate, BookingUpdate, Payment};
use shared::{AppError, AppResult};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct BookingTable {
    bookings: Vec<Booking>,
    next_id: i64,
}

/// 预订存储
///
/// 与 [`RoomStore`](super::RoomStore) 之间没有事务关系：删除房间不会影响已有预订。
#[derive(Debug, Clone)]
pub struct BookingStore {
    inner: Arc<RwLock<BookingTable>>,
}

impl BookingStore {
    pub fn new(bookings: Vec<Booking>) -> Self {
        let next_id = bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(BookingTable { bookings, next_id })),
        }
    }

    pub fn seeded() -> Self {
        Self::new(super::seed::bookings())
    }

    pub async fn list(&self) -> Vec<Booking> {
        self.inner.read().await.bookings.clone()
    }

    pub async fn find(&self, id: i64) -> Option<Booking> {
        self.inner
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// 插入新预订，分配自增 ID
    pub async fn insert(&self, create: BookingCreate, payment: Payment) -> Booking {
        let mut table = self.inner.write().await;
        let booking = Booking {
            id: table.next_id,
            room_id: create.room_id,
            guest: create.guest,
            availability: create.availability,
            payment,
            pay_status: create.pay_status,
        };
        table.next_id += 1;
        table.bookings.push(booking.clone());
        booking
    }

    pub async fn update(&self, id: i64, update: BookingUpdate) -> AppResult<Booking> {
        let mut table = self.inner.write().await;
        let booking = table
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::booking_not_found(id))?;
        update.apply_to(booking);
        Ok(booking.clone())
    }

    pub async fn delete(&self, id: i64) -> AppResult<Booking> {
        let mut table = self.inner.write().await;
        let idx = table
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::booking_not_found(id))?;
        Ok(table.bookings.remove(idx))
    }

    /// 标记已付款并记录付款时间
    pub async fn mark_paid(&self, id: i64, paid_at: i64) -> AppResult<Booking> {
        let mut table = self.inner.write().await;
        let booking = table
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::booking_not_found(id))?;
        booking.pay_status = true;
        booking.payment.paid_at.get_or_insert(paid_at);
        Ok(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::ErrorCode;
    use shared::models::{Availability, Guest};

    fn create(room_id: i64) -> BookingCreate {
        let check_in = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        BookingCreate {
            room_id,
            guest: Guest {
                name: "Marta".to_string(),
                email: "marta@example.com".to_string(),
                phone: "611".to_string(),
            },
            availability: Availability {
                check_in,
                check_out: check_in + chrono::Duration::days(2),
                adults: 2,
                children: 1,
                extra_requests: Some("crib".to_string()),
            },
            payment: None,
            pay_status: false,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = BookingStore::new(vec![]);
        let a = store.insert(create(1), Payment::default()).await;
        let b = store.insert(create(2), Payment::default()).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = BookingStore::new(vec![]);
        let a = store.insert(create(1), Payment::default()).await;
        store.delete(a.id).await.unwrap();
        let b = store.insert(create(1), Payment::default()).await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_missing_booking_errors() {
        let store = BookingStore::new(vec![]);
        let err = store.delete(42).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
        let err = store.update(42, BookingUpdate::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[tokio::test]
    async fn test_mark_paid_keeps_first_timestamp() {
        let store = BookingStore::new(vec![]);
        let b = store.insert(create(1), Payment::default()).await;
        let paid = store.mark_paid(b.id, 1000).await.unwrap();
        assert!(paid.pay_status);
        assert_eq!(paid.payment.paid_at, Some(1000));
        let again = store.mark_paid(b.id, 2000).await.unwrap();
        assert_eq!(again.payment.paid_at, Some(1000));
    }
}
