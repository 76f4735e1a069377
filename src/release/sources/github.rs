//! Binary source for an arbitrary GitHub repository

use async_trait::async_trait;

use crate::release::error::ResolveError;
use crate::release::http::HttpFetcher;
use crate::release::mapping::ReleaseMapping;
use crate::release::resolver::ReleaseResolver;
use crate::release::source::BinarySource;
use crate::release::types::ExternalBinary;

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Source backed by the releases of one GitHub repository
pub struct GitHubSource<F> {
    resolver: ReleaseResolver<F>,
}

impl<F: HttpFetcher> GitHubSource<F> {
    /// Creates a source for `repository` ("owner/name") under `api_url`
    pub fn new(fetcher: F, api_url: &str, repository: &str, mapping: ReleaseMapping) -> Self {
        let base_url = format!(
            "{}/repos/{}",
            api_url.trim_end_matches('/'),
            repository.trim_matches('/')
        );

        Self {
            resolver: ReleaseResolver::new(fetcher, &base_url, mapping),
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.resolver = self.resolver.with_max_pages(max_pages);
        self
    }

    /// Repository endpoint the releases are read from
    pub fn repository_url(&self) -> &str {
        self.resolver.base_url()
    }
}

#[async_trait]
impl<F: HttpFetcher> BinarySource for GitHubSource<F> {
    async fn latest_release(&self) -> Result<ExternalBinary, ResolveError> {
        self.resolver.latest().await
    }

    async fn release_for_version(
        &self,
        version: &str,
    ) -> Result<Option<ExternalBinary>, ResolveError> {
        self.resolver.find(version).await
    }
}
