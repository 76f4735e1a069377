//! HTTP collaborator used by the release resolver

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, warn};

use crate::release::error::FetchError;

/// Default user agent sent to release registries
const USER_AGENT: &str = "binary-source";

/// Fetches a URL and returns the response body as text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: HttpFetcher + ?Sized> HttpFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// `HttpFetcher` backed by a shared reqwest client
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Release registry returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher() -> ReqwestFetcher {
        ReqwestFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let url = format!("{}/releases?page=1", server.url());
        let body = fetcher().fetch(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases/latest")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let url = format!("{}/releases/latest", server.url());
        let result = fetcher().fetch(&url).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status: 404, url: ref u }) if *u == url
        ));
    }
}
