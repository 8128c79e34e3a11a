//! HTTP access to the production-management backend.
//!
//! Every request goes through [`ApiClient`], which owns the configured base
//! URL and the `/api` prefix, applies the shared timeout, and maps failures
//! into the [`AppError`] taxonomy. When the backend rejects an operation
//! with a `detail` message, that message is surfaced verbatim.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

/// Plain acknowledgement body returned by mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Error body shape used by the backend for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::from_parts(&config.api_base_url, config.request_timeout)
    }

    pub fn from_parts(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("fabrika/1.0")
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Build a query string with encoded values appended to `path`.
    pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
        if pairs.is_empty() {
            return path.to_string();
        }
        let encoded: Vec<String> = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        format!("{}?{}", path, encoded.join("&"))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.client.put(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<Ack> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::error_from(status, response).await)
    }

    async fn error_from(status: StatusCode, response: Response) -> AppError {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail.or(body.message));

        match status {
            StatusCode::NOT_FOUND => {
                AppError::NotFound(detail.unwrap_or_else(|| "Resource not found".to_string()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::Unauthorized(detail.unwrap_or_else(|| "Not authorized".to_string()))
            }
            _ => AppError::Rejected(
                detail.unwrap_or_else(|| format!("Request failed with HTTP {}", status.as_u16())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_values() {
        let path = ApiClient::with_query("/jobs", &[("machine_id", "m-1"), ("status", "in progress")]);
        assert_eq!(path, "/jobs?machine_id=m-1&status=in%20progress");
    }

    #[test]
    fn test_with_query_empty_pairs() {
        assert_eq!(ApiClient::with_query("/machines", &[]), "/machines");
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ApiClient::from_parts("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/jobs"), "http://localhost:8000/api/jobs");
    }
}
