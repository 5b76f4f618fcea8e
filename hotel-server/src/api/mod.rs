//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`accounts`] - 登录与注册
//! - [`rooms`] - 房间列表
//! - [`room_types`] - 房型查询与批量更新
//! - [`bookings`] - 预订管理与付款确认
//! - [`reservation_fee`] - 全局预订费比例

pub mod accounts;
pub mod bookings;
pub mod health;
pub mod reservation_fee;
pub mod room_types;
pub mod rooms;
