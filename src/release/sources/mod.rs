//! Binary source implementations

pub mod github;
pub mod ie_driver;
pub mod selenium_server;

pub use github::GitHubSource;
pub use ie_driver::{Architecture, IeDriverSource};
pub use selenium_server::SeleniumServerSource;
