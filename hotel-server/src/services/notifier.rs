use std::collections::VecDeque;
use std::sync::Arc;

use shared::models::PaymentConfirmation;
use tokio::sync::{RwLock, broadcast};

/// 付款确认通知
///
/// 不发送真实邮件：每条确认写入内存发件箱，同时广播给订阅者。
/// 发件箱只保留最近 `capacity` 条，超出时丢弃最旧的。
#[derive(Debug, Clone)]
pub struct PaymentNotifier {
    outbox: Arc<RwLock<VecDeque<PaymentConfirmation>>>,
    capacity: usize,
    tx: broadcast::Sender<PaymentConfirmation>,
}

impl PaymentNotifier {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _) = broadcast::channel(capacity);
        Self {
            outbox: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
            tx,
        }
    }

    pub async fn send(&self, confirmation: PaymentConfirmation) {
        tracing::info!(
            booking_id = confirmation.booking_id,
            email = %confirmation.email,
            amount = %confirmation.amount,
            "Payment confirmation sent"
        );
        {
            let mut outbox = self.outbox.write().await;
            if outbox.len() == self.capacity {
                outbox.pop_front();
            }
            outbox.push_back(confirmation.clone());
        }
        // 没有订阅者时发送失败是正常情况
        let _ = self.tx.send(confirmation);
    }

    /// 发件箱中保留的确认，从旧到新
    pub async fn sent(&self) -> Vec<PaymentConfirmation> {
        self.outbox.read().await.iter().cloned().collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PaymentConfirmation> {
        self.tx.subscribe()
    }
}

impl Default for PaymentNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn confirmation(id: i64) -> PaymentConfirmation {
        PaymentConfirmation {
            booking_id: id,
            email: "guest@example.com".to_string(),
            amount: Decimal::new(12000, 2),
            sent_at: 0,
        }
    }

    #[tokio::test]
    async fn test_send_records_and_broadcasts() {
        let notifier = PaymentNotifier::default();
        let mut rx = notifier.subscribe();

        notifier.send(confirmation(1)).await;
        notifier.send(confirmation(2)).await;

        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].booking_id, 2);
        assert_eq!(rx.recv().await.unwrap().booking_id, 1);
    }

    #[tokio::test]
    async fn test_outbox_keeps_latest_entries() {
        let notifier = PaymentNotifier::new(2);
        for id in 1..=3 {
            notifier.send(confirmation(id)).await;
        }
        let ids: Vec<i64> = notifier.sent().await.iter().map(|c| c.booking_id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_send_without_subscribers() {
        let notifier = PaymentNotifier::default();
        notifier.send(confirmation(3)).await;
        assert_eq!(notifier.sent().await.len(), 1);
    }
}
