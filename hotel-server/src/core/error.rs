use thiserror::Error;

/// 服务器启动与运行期错误
///
/// 请求级错误统一使用 [`shared::AppError`]，这里只覆盖进程级故障。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
