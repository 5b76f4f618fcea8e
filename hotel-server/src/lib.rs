//! Hotel Server - 酒店前台后端 (模拟服务)
//!
//! # 架构概述
//!
//! 内存存储的 REST 服务，为前台提供房间、房型、预订、预订费和账户接口。
//! 认证为占位实现：明文密码、未签名令牌，写接口只检查令牌是否存在。
//!
//! # 模块结构
//!
//! ```text
//! hotel-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 假令牌、令牌存在性检查
//! ├── store/         # 内存存储与初始数据
//! ├── services/      # 付款确认通知
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装与中间件
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use auth::TokenService;
pub use core::{Config, Server, ServerState};
pub use routes::build_app;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 按配置初始化日志
///
/// 返回的 guard 需要持有到进程退出，否则文件日志可能丢失。
pub fn setup_environment(
    config: &Config,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    )
}
