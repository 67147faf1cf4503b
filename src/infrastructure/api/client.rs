use crate::config::ClientConfig;
use crate::domain::error::{ApiError, ConfigError};
use crate::domain::ports::response_hook::ResponseHook;
use crate::infrastructure::api::hooks::PassThroughHook;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Raw response of a successful request. Empty bodies become `Null`;
/// bodies that are not JSON are kept as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Decode the body into a typed payload.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.data.clone()).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.data).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// HTTP client bound to the backend base URL. One request per call; every
/// failure goes through the installed [`ResponseHook`] exactly once.
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    hook: Arc<dyn ResponseHook>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder()
            .user_agent(concat!("trinity-quant/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            config,
            hook: Arc::new(PassThroughHook),
        })
    }

    /// Replace the response hook.
    pub fn with_hook(mut self, hook: Arc<dyn ResponseHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.config.base_url, path))
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, path, self.request(Method::GET, path))
            .await
    }

    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, path, self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send(Method::POST, path, self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        self.send(Method::PUT, path, self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(Method::DELETE, path, self.request(Method::DELETE, path))
            .await
    }

    async fn send(&self, method: Method, path: &str, req: RequestBuilder) -> Result<ApiResponse, ApiError> {
        tracing::debug!(%method, path, "api request");
        match dispatch(req).await {
            Ok(resp) => {
                tracing::debug!(%method, path, status = resp.status, "api response");
                Ok(resp)
            }
            Err(e) => Err(self.hook.on_error(e)),
        }
    }
}

async fn dispatch(req: RequestBuilder) -> Result<ApiResponse, ApiError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let data = parse_body(text);

    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            detail: data,
        });
    }

    Ok(ApiResponse {
        status: status.as_u16(),
        data,
    })
}

fn parse_body(text: String) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}
