//! Common types for release resolution

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved, downloadable binary artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExternalBinary {
    version: String,
    url: String,
}

impl ExternalBinary {
    pub fn new(version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            url: url.into(),
        }
    }

    /// Version identifier in the provider's own format (e.g. "3.0.0.Final")
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Fully-qualified download location
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ExternalBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.url)
    }
}

/// One release entry as served by a GitHub-style releases API
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseRecord {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// Downloadable asset attached to a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}
