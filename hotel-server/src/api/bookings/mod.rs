//! Bookings API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/bookings | GET | 列表 |
//! | /api/bookings | POST | 创建 |
//! | /api/bookings/{id} | PUT | 部分更新 |
//! | /api/bookings/{id} | DELETE | 删除 |
//! | /api/bookings/send-payment-confirmation | POST | 发送付款确认并标记已付 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/send-payment-confirmation",
            post(handler::send_payment_confirmation),
        )
        .route(
            "/{id}",
            put(handler::update)
                .delete(handler::delete)
                .get(handler::get_by_id),
        )
}
