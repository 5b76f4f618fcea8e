use crate::auth::TokenService;
use crate::core::Config;
use crate::services::PaymentNotifier;
use crate::store::{AccountStore, BookingStore, FeeStore, RoomStore};

/// 服务器状态 - 持有所有存储和服务的共享引用
///
/// 每个字段内部都是 `Arc`，克隆开销很小，可以直接作为 axum `State`。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | accounts | 账户 |
/// | rooms | 房间与房型 |
/// | bookings | 预订 |
/// | fees | 全局预订费比例 |
/// | notifier | 付款确认发件箱 |
/// | tokens | 假令牌签发 |
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub accounts: AccountStore,
    pub rooms: RoomStore,
    pub bookings: BookingStore,
    pub fees: FeeStore,
    pub notifier: PaymentNotifier,
    pub tokens: TokenService,
}

impl ServerState {
    /// 载入初始数据创建状态
    pub fn initialize(config: &Config) -> Self {
        let state = Self {
            config: config.clone(),
            accounts: AccountStore::seeded(),
            rooms: RoomStore::seeded(),
            bookings: BookingStore::seeded(),
            fees: FeeStore::default(),
            notifier: PaymentNotifier::default(),
            tokens: TokenService::new(config.token_ttl_secs),
        };
        tracing::debug!(environment = %config.environment, "Server state initialized");
        state
    }
}
