//! Paginated release lookup against a GitHub-style releases API

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::release::error::ResolveError;
use crate::release::http::HttpFetcher;
use crate::release::mapping::ReleaseMapping;
use crate::release::types::{ExternalBinary, ReleaseRecord};

/// Upper bound on pages walked by a single lookup
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Walks the release listing of one repository
///
/// The base URL is the repository endpoint, e.g.
/// `https://api.github.com/repos/SeleniumHQ/selenium`. Listing pages are
/// requested as `<base>/releases?page=<n>` and the latest release as
/// `<base>/releases/latest`.
pub struct ReleaseResolver<F> {
    fetcher: F,
    base_url: String,
    mapping: ReleaseMapping,
    max_pages: u32,
}

impl<F: HttpFetcher> ReleaseResolver<F> {
    pub fn new(fetcher: F, base_url: &str, mapping: ReleaseMapping) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            mapping,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Overrides the page cap; values below 1 are raised to 1
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/releases?page={}", self.base_url, page)
    }

    fn latest_url(&self) -> String {
        format!("{}/releases/latest", self.base_url)
    }

    /// Resolves the release served by the dedicated latest endpoint
    pub async fn latest(&self) -> Result<ExternalBinary, ResolveError> {
        let url = self.latest_url();
        let record: ReleaseRecord = self.fetch_json(&url).await?;

        let binary = self.mapping.to_binary(&record)?;
        info!("Latest release of {} is {}", self.base_url, binary);
        Ok(binary)
    }

    /// Finds the release whose version equals `version` exactly
    ///
    /// Pages are requested in order starting at 1 until a match is found or a
    /// page comes back empty. `Ok(None)` means the version does not exist.
    pub async fn find(&self, version: &str) -> Result<Option<ExternalBinary>, ResolveError> {
        for page in 1..=self.max_pages {
            let url = self.page_url(page);
            let records: Vec<ReleaseRecord> = self.fetch_json(&url).await?;

            if records.is_empty() {
                info!(
                    "Version {} not found in {} after {} page(s)",
                    version,
                    self.base_url,
                    page - 1
                );
                return Ok(None);
            }

            debug!("Page {} of {} has {} release(s)", page, self.base_url, records.len());

            if let Some(record) = records
                .iter()
                .find(|record| self.mapping.version_of(record) == version)
            {
                let binary = self.mapping.to_binary(record)?;
                info!("Resolved {} on page {}: {}", version, page, binary.url());
                return Ok(Some(binary));
            }
        }

        warn!(
            "Gave up looking for {} in {} after {} pages",
            version, self.base_url, self.max_pages
        );
        Err(ResolveError::PageLimit {
            limit: self.max_pages,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ResolveError> {
        let body = self.fetcher.fetch(url).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse release payload from {}: {}", url, e);
            ResolveError::Parse {
                url: url.to_string(),
                source: e,
            }
        })
    }
}
