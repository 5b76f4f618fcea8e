//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::routes::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// 绑定端口并运行，直到收到 Ctrl+C
    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config),
        };

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!("🏨 Hotel server starting on {}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        serve(listener, state, shutdown).await
    }
}

/// 在已绑定的监听器上提供服务
///
/// 测试可以绑定 `127.0.0.1:0` 后直接调用。
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&state).with_state(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}
