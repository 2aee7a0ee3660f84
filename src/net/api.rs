//! REST gateway for the remote article store.
//!
//! `ArticleService` is the seam between the session and the network; the
//! HTTP implementation talks to a json-server style `/posts` resource.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses both surface as [`ApiError`].
//! Callers never need to tell them apart: the session logs either one and
//! leaves local state as it was before the call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::Url;

use super::types::{Article, ArticleId, ArticleStatus, NewArticle, StatusPatch};
use crate::config::DeskConfig;

/// Errors produced by gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request URL could not be built from the base URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The remote store answered with a non-success status.
    #[error("remote store returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Remote operations the desk relies on. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ArticleService: Send + Sync {
    /// Fetch every article whose title contains `query`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    async fn list(&self, query: &str) -> Result<Vec<Article>, ApiError>;

    /// Create an article and return the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is malformed.
    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError>;

    /// Persist a status change for one article.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn set_status(&self, id: &ArticleId, status: ArticleStatus) -> Result<(), ApiError>;

    /// Delete one article.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    async fn remove(&self, id: &ArticleId) -> Result<(), ApiError>;
}

pub(crate) fn collection_url(base_url: &str) -> Result<Url, ApiError> {
    Url::parse(&format!("{base_url}/posts")).map_err(|e| ApiError::InvalidUrl(e.to_string()))
}

pub(crate) fn list_url(base_url: &str, query: &str) -> Result<Url, ApiError> {
    Url::parse_with_params(&format!("{base_url}/posts"), &[("title_like", query)])
        .map_err(|e| ApiError::InvalidUrl(e.to_string()))
}

pub(crate) fn item_url(base_url: &str, id: &ArticleId) -> Result<Url, ApiError> {
    let mut url = collection_url(base_url)?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(base_url.to_owned()))?
        .push(&id.to_string());
    Ok(url)
}

/// HTTP implementation of [`ArticleService`].
pub struct HttpArticleService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpArticleService {
    /// Build the HTTP gateway from desk config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &DeskConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeouts.request() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.timeouts.connect() {
            builder = builder.connect_timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ArticleService for HttpArticleService {
    async fn list(&self, query: &str) -> Result<Vec<Article>, ApiError> {
        let url = list_url(&self.base_url, query)?;
        let text = self.send(self.http.get(url)).await?;
        parse_article_list(&text)
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, ApiError> {
        let url = collection_url(&self.base_url)?;
        let text = self.send(self.http.post(url).json(article)).await?;
        parse_article(&text)
    }

    async fn set_status(&self, id: &ArticleId, status: ArticleStatus) -> Result<(), ApiError> {
        let url = item_url(&self.base_url, id)?;
        self.send(self.http.patch(url).json(&StatusPatch { status })).await?;
        Ok(())
    }

    async fn remove(&self, id: &ArticleId) -> Result<(), ApiError> {
        let url = item_url(&self.base_url, id)?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_article_list(json: &str) -> Result<Vec<Article>, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_article(json: &str) -> Result<Article, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
}
