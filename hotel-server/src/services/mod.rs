//! 服务层
//!
//! - [`PaymentNotifier`] - 付款确认通知 (发件箱)

pub mod notifier;

pub use notifier::PaymentNotifier;
