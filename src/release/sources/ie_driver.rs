//! Internet Explorer driver source

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::release::error::ResolveError;
use crate::release::http::HttpFetcher;
use crate::release::mapping::{AssetLocator, ReleaseMapping};
use crate::release::source::BinarySource;
use crate::release::sources::github::GitHubSource;
use crate::release::sources::selenium_server::{SELENIUM_REPOSITORY, SELENIUM_TAG_PREFIX};
use crate::release::types::ExternalBinary;

/// Build flavour of IEDriverServer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Architecture {
    #[default]
    Win32,
    X64,
}

impl Architecture {
    /// Name fragment used in the asset file name
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Win32 => "Win32",
            Architecture::X64 => "x64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win32" | "x86" => Ok(Architecture::Win32),
            "x64" | "win64" => Ok(Architecture::X64),
            other => Err(format!("unknown IE driver architecture: {}", other)),
        }
    }
}

/// Resolves the IEDriverServer zip published with Selenium releases
pub struct IeDriverSource<F> {
    inner: GitHubSource<F>,
    version: Option<String>,
    architecture: Architecture,
}

impl<F: HttpFetcher> IeDriverSource<F> {
    pub fn new(
        fetcher: F,
        api_url: &str,
        version: Option<String>,
        architecture: Architecture,
    ) -> Self {
        let pattern = format!(r"IEDriverServer_{}_{{version}}\.zip", architecture.as_str());
        let mapping = ReleaseMapping::new(AssetLocator::FileName(pattern))
            .with_tag_prefix(SELENIUM_TAG_PREFIX);

        Self {
            inner: GitHubSource::new(fetcher, api_url, SELENIUM_REPOSITORY, mapping),
            version,
            architecture,
        }
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.inner = self.inner.with_max_pages(max_pages);
        self
    }

    pub fn target_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Resolves the version this source was created for
    pub async fn resolve_target(&self) -> Result<Option<ExternalBinary>, ResolveError> {
        self.resolve(self.version.as_deref()).await
    }
}

#[async_trait]
impl<F: HttpFetcher> BinarySource for IeDriverSource<F> {
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
