//! Selenium standalone server source

use async_trait::async_trait;

use crate::release::error::ResolveError;
use crate::release::http::HttpFetcher;
use crate::release::mapping::{AssetLocator, ReleaseMapping};
use crate::release::source::BinarySource;
use crate::release::sources::github::GitHubSource;
use crate::release::types::ExternalBinary;

/// Repository publishing Selenium release artifacts
pub const SELENIUM_REPOSITORY: &str = "SeleniumHQ/selenium";

/// Selenium release tags look like `selenium-4.10.0`
pub const SELENIUM_TAG_PREFIX: &str = "selenium-";

const SERVER_ASSET_PATTERN: &str = r"selenium-server-{version}\.jar";

/// Resolves the Selenium standalone server jar
pub struct SeleniumServerSource<F> {
    inner: GitHubSource<F>,
    version: Option<String>,
}

impl<F: HttpFetcher> SeleniumServerSource<F> {
    /// Creates a source targeting `version`, or the latest release when `None`
    pub fn new(fetcher: F, api_url: &str, version: Option<String>) -> Self {
        let mapping =
            ReleaseMapping::new(AssetLocator::FileName(SERVER_ASSET_PATTERN.to_string()))
                .with_tag_prefix(SELENIUM_TAG_PREFIX);

        Self {
            inner: GitHubSource::new(fetcher, api_url, SELENIUM_REPOSITORY, mapping),
            version,
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.inner = self.inner.with_max_pages(max_pages);
        self
    }

    pub fn target_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Resolves the version this source was created for
    pub async fn resolve_target(&self) -> Result<Option<ExternalBinary>, ResolveError> {
        self.resolve(self.version.as_deref()).await
    }
}

#[async_trait]
impl<F: HttpFetcher> BinarySource for SeleniumServerSource<F> {
    async fn latest_release(&self) -> Result<ExternalBinary, ResolveError> {
        self.inner.latest_release().await
    }

    async fn release_for_version(
        &self,
        version: &str,
    ) -> Result<Option<ExternalBinary>, ResolveError> {
        self.inner.release_for_version(version).await
    }
}
