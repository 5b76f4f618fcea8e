//! 内存存储层
//!
//! Mock 后端不做持久化，重启即丢失。每个存储都是 `Arc<RwLock<_>>` 的浅拷贝句柄，
//! 可以随 [`ServerState`](crate::core::ServerState) 一起 clone。
//!
//! - [`AccountStore`] - 账号 (线性扫描登录，明文密码)
//! - [`RoomStore`] - 房间与房型
//! - [`BookingStore`] - 预订
//! - [`FeeStore`] - 全局预订费比例

mod accounts;
mod bookings;
mod fees;
mod rooms;
pub mod seed;

pub use accounts::AccountStore;
pub use bookings::BookingStore;
pub use fees::FeeStore;
pub use rooms::RoomStore;
