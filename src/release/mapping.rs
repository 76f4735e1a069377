//! Conversion of raw release records into `ExternalBinary` values
//!
//! A mapping decides two things for a provider:
//! - which version identifier a record carries (its tag, minus an optional prefix)
//! - where the binary for that version can be downloaded from

use regex::Regex;

use crate::release::error::ResolveError;
use crate::release::types::{ExternalBinary, ReleaseRecord};

/// Placeholder substituted with the release version in patterns and templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// How the download URL of a release is located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocator {
    /// First asset whose file name matches the pattern
    FileName(String),
    /// URL built from a template, independent of the listed assets
    UrlTemplate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMapping {
    tag_prefix: Option<String>,
    locator: AssetLocator,
}

impl ReleaseMapping {
    pub fn new(locator: AssetLocator) -> Self {
        Self {
            tag_prefix: None,
            locator,
        }
    }

    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = Some(prefix.into());
        self
    }

    /// Version identifier of a record
    pub fn version_of<'a>(&self, record: &'a ReleaseRecord) -> &'a str {
        match &self.tag_prefix {
            Some(prefix) => record
                .tag_name
                .strip_prefix(prefix.as_str())
                .unwrap_or(record.tag_name.as_str()),
            None => record.tag_name.as_str(),
        }
    }

    pub fn to_binary(&self, record: &ReleaseRecord) -> Result<ExternalBinary, ResolveError> {
        let version = self.version_of(record);

        let url = match &self.locator {
            AssetLocator::UrlTemplate(template) => template.replace(VERSION_PLACEHOLDER, version),
            AssetLocator::FileName(pattern) => {
                let regex = file_name_regex(pattern, version)?;
                record
                    .assets
                    .iter()
                    .find(|asset| regex.is_match(&asset.name))
                    .map(|asset| asset.browser_download_url.clone())
                    .ok_or_else(|| ResolveError::Conversion {
                        version: version.to_string(),
                        reason: format!("no asset matches {}", regex.as_str()),
                    })?
            }
        };

        Ok(ExternalBinary::new(version, url))
    }
}

/// Anchored regex for an asset file name, with the version inserted literally
fn file_name_regex(pattern: &str, version: &str) -> Result<Regex, ResolveError> {
    let pattern = pattern.replace(VERSION_PLACEHOLDER, &regex::escape(version));
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| ResolveError::Conversion {
        version: version.to_string(),
        reason: format!("invalid asset pattern: {}", e),
    })
}
