// Release resolution layer
// - types.rs: ExternalBinary and raw release records
// - error.rs: Fetch and resolution errors
// - http.rs: HttpFetcher trait and reqwest implementation
// - mapping.rs: Record-to-binary conversion
// - resolver.rs: Paginated release lookup
// - source.rs: BinarySource trait
// - sources/: Provider implementations
//   - github.rs: Any GitHub repository
//   - selenium_server.rs: Selenium standalone server
//   - ie_driver.rs: Internet Explorer driver

pub mod error;
pub mod http;
pub mod mapping;
pub mod resolver;
pub mod source;
pub mod sources;
pub mod types;

pub use error::{FetchError, ResolveError};
pub use http::{HttpFetcher, ReqwestFetcher};
pub use mapping::{AssetLocator, ReleaseMapping};
pub use resolver::ReleaseResolver;
pub use source::BinarySource;
pub use types::ExternalBinary;
