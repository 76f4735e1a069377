//! Binary source trait shared by all release providers

use async_trait::async_trait;

use crate::release::error::ResolveError;
use crate::release::types::ExternalBinary;

/// Uniform lookup surface for downloadable binaries
#[async_trait]
pub trait BinarySource: Send + Sync {
    /// Resolves the most recently published release
    ///
    /// # Returns
    /// * `Ok(ExternalBinary)` - The latest release and its download URL
    /// * `Err(ResolveError)` - If the registry could not be read or the release has no usable asset
    async fn latest_release(&self) -> Result<ExternalBinary, ResolveError>;

    /// Resolves the release whose version identifier equals `version`
    ///
    /// # Returns
    /// * `Ok(Some(ExternalBinary))` - The matching release
    /// * `Ok(None)` - No release carries this version
    /// * `Err(ResolveError)` - If the lookup could not complete
    async fn release_for_version(
        &self,
        version: &str,
    ) -> Result<Option<ExternalBinary>, ResolveError>;

    /// Resolves `version`, or the latest release when no version is given
    async fn resolve(&self, version: Option<&str>) -> Result<Option<ExternalBinary>, ResolveError> {
        match version {
            Some(version) => self.release_for_version(version).await,
            None => self.latest_release().await.map(Some),
        }
    }
}
