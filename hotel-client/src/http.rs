//! HTTP client for the hotel backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, RenderContext};
use crate::loading::LoadingGate;
use crate::storage::SecureSession;
use crate::{ClientError, ClientResult};
use shared::ApiResponse;

/// HTTP 客户端 trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// Session holding the auth token
    fn session(&self) -> &SecureSession;
}

/// 网络 HTTP 客户端
///
/// Attaches `Authorization: Bearer <token>` when a token is stored and the
/// client runs in the browser. Non-API requests hold the loading gate.
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: SecureSession,
    gate: LoadingGate,
    render_context: RenderContext,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: SecureSession::in_memory(),
            gate: LoadingGate::new(config.loading_safety_timeout),
            render_context: config.render_context,
        })
    }

    /// Share a session with other components (e.g. the error reporter)
    pub fn with_session(mut self, session: SecureSession) -> Self {
        self.session = session;
        self
    }

    pub fn with_gate(mut self, gate: LoadingGate) -> Self {
        self.gate = gate;
        self
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        if self.render_context != RenderContext::Browser {
            return None;
        }
        self.session.token().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, req: RequestBuilder) -> ClientResult<T> {
        let _guard = self.gate.begin(path);
        let response = req.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // 尝试解析为 API 错误响应
            let (code, message) = match serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
            {
                Ok(body) => (body.code, body.message),
                Err(_) if text.is_empty() => (
                    None,
                    status.canonical_reason().unwrap_or("Request failed").to_string(),
                ),
                Err(_) => (None, text),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }
        Ok(response.json().await?)
    }

    /// Plain-text GET, typically a page or asset outside `/api/`
    pub async fn fetch_text(&self, path: &str) -> ClientResult<String> {
        let _guard = self.gate.begin(path);
        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                code: None,
                message: text,
            });
        }
        Ok(text)
    }

    /// Per-request timeout override
    pub async fn get_with_timeout<T: DeserializeOwned>(
        &self,
        path: &str,
        timeout: Duration,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).timeout(timeout);
        self.send(path, req).await
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path);
        self.send(path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).json(body);
        self.send(path, req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).json(body);
        self.send(path, req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path);
        self.send(path, req).await
    }

    fn session(&self) -> &SecureSession {
        &self.session
    }
}
