/// 服务器配置 - 前台后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | MAX_CONCURRENT_REQUESTS | 100 | 最大并发请求数 |
/// | TOKEN_TTL_SECS | 3600 | 登录令牌有效期(秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 LOG_LEVEL=debug cargo run -p hotel-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 最大并发请求数
    pub max_concurrent_requests: usize,
    /// 登录令牌有效期 (秒)
    pub token_ttl_secs: i64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            max_concurrent_requests: std::env::var("MAX_CONCURRENT_REQUESTS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(100),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3600),
        }
    }

    /// 使用自定义端口覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_port(http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
