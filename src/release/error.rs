use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch release listing: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to parse release payload from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Release {version} cannot be converted to a binary: {reason}")]
    Conversion { version: String, reason: String },

    #[error("Release listing did not end within {limit} pages")]
    PageLimit { limit: u32 },
}
