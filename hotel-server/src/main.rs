use anyhow::Context;
use hotel_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 载入 .env (不存在时忽略)
    dotenv::dotenv().ok();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    let _log_guard = setup_environment(&config);

    tracing::info!("🏨 Hotel server starting...");

    // 3. 初始化状态 (载入初始数据)
    let state = ServerState::initialize(&config);

    // 4. 启动 HTTP 服务器
    Server::with_state(config, state)
        .run()
        .await
        .context("hotel server terminated")?;

    Ok(())
}
