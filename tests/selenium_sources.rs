//! Selenium server and IE driver sources sharing one fetcher

use std::sync::Arc;
use std::time::Duration;

use mockito::Server;

use binary_source::release::sources::{Architecture, IeDriverSource, SeleniumServerSource};
use binary_source::release::{ExternalBinary, HttpFetcher, ReqwestFetcher};

const RELEASES: &str = r#"[
    {
        "tag_name": "selenium-4.10.0",
        "assets": [
            {"name": "IEDriverServer_Win32_4.10.0.zip", "browser_download_url": "https://github.com/SeleniumHQ/selenium/releases/download/selenium-4.10.0/IEDriverServer_Win32_4.10.0.zip"},
            {"name": "IEDriverServer_x64_4.10.0.zip", "browser_download_url": "https://github.com/SeleniumHQ/selenium/releases/download/selenium-4.10.0/IEDriverServer_x64_4.10.0.zip"},
            {"name": "selenium-server-4.10.0.jar", "browser_download_url": "https://github.com/SeleniumHQ/selenium/releases/download/selenium-4.10.0/selenium-server-4.10.0.jar"}
        ]
    }
]"#;

#[tokio::test]
async fn adapters_resolve_their_own_assets_from_the_same_release() {
    let mut server = Server::new_async().await;
    let listing = server
        .mock("GET", "/repos/SeleniumHQ/selenium/releases?page=1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RELEASES)
        .expect(2)
        .create_async()
        .await;

    let fetcher: Arc<dyn HttpFetcher> =
        Arc::new(ReqwestFetcher::new(Duration::from_secs(5)).unwrap());
    let server_source =
        SeleniumServerSource::new(fetcher.clone(), &server.url(), Some("4.10.0".to_string()));
    let ie_source = IeDriverSource::new(
        fetcher,
        &server.url(),
        Some("4.10.0".to_string()),
        Architecture::X64,
    );

    let server_jar = server_source.resolve_target().await.unwrap();
    let ie_driver = ie_source.resolve_target().await.unwrap();

    listing.assert_async().await;
    assert_eq!(
        server_jar,
        Some(ExternalBinary::new(
            "4.10.0",
            "https://github.com/SeleniumHQ/selenium/releases/download/selenium-4.10.0/selenium-server-4.10.0.jar"
        ))
    );
    assert_eq!(
        ie_driver,
        Some(ExternalBinary::new(
            "4.10.0",
            "https://github.com/SeleniumHQ/selenium/releases/download/selenium-4.10.0/IEDriverServer_x64_4.10.0.zip"
        ))
    );
}

#[tokio::test]
async fn unknown_selenium_version_is_absent() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/repos/SeleniumHQ/selenium/releases?page=1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RELEASES)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/repos/SeleniumHQ/selenium/releases?page=2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let source = SeleniumServerSource::new(
        ReqwestFetcher::new(Duration::from_secs(5)).unwrap(),
        &server.url(),
        Some("2.53.1".to_string()),
    );

    let result = source.resolve_target().await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(result, None);
}
