//! Command-line surface of the `binary-source` binary

use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::release::http::{HttpFetcher, ReqwestFetcher};
use crate::release::mapping::{AssetLocator, ReleaseMapping};
use crate::release::source::BinarySource;
use crate::release::sources::{Architecture, GitHubSource, IeDriverSource, SeleniumServerSource};
use crate::release::types::ExternalBinary;

#[derive(Debug, Parser)]
#[command(
    name = "binary-source",
    version,
    about = "Resolve a binary version to its download URL"
)]
pub struct Cli {
    #[command(subcommand)]
    pub source: SourceCommand,
}

#[derive(Debug, Subcommand)]
pub enum SourceCommand {
    /// Selenium standalone server jar
    SeleniumServer {
        /// Version to resolve; latest when omitted
        version: Option<String>,
    },
    /// Internet Explorer driver
    IeDriver {
        /// Version to resolve; latest when omitted
        version: Option<String>,
        #[arg(long, default_value = "win32")]
        arch: Architecture,
    },
    /// Releases of any GitHub repository
    Github {
        /// Repository as owner/name
        #[arg(long)]
        repo: String,
        /// Version to resolve; latest when omitted
        version: Option<String>,
        /// Asset file name pattern; `{version}` is replaced by the release version
        #[arg(long, conflicts_with = "url_template", required_unless_present = "url_template")]
        asset: Option<String>,
        /// Download URL template; `{version}` is replaced by the release version
        #[arg(long)]
        url_template: Option<String>,
        /// Prefix stripped from release tags to obtain the version
        #[arg(long)]
        tag_prefix: Option<String>,
    },
}

/// Resolves the binary selected on the command line
pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<Option<ExternalBinary>> {
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new(config.timeout)?);
    info!("Resolving {:?} against {}", cli.source, config.api_url);

    let binary = match cli.source {
        SourceCommand::SeleniumServer { version } => {
            SeleniumServerSource::new(fetcher, &config.api_url, version)
                .with_max_pages(config.max_pages)
                .resolve_target()
                .await?
        }
        SourceCommand::IeDriver { version, arch } => {
            IeDriverSource::new(fetcher, &config.api_url, version, arch)
                .with_max_pages(config.max_pages)
                .resolve_target()
                .await?
        }
        SourceCommand::Github {
            repo,
            version,
            asset,
            url_template,
            tag_prefix,
        } => {
            let locator = match (asset, url_template) {
                (Some(pattern), _) => AssetLocator::FileName(pattern),
                (None, Some(template)) => AssetLocator::UrlTemplate(template),
                (None, None) => bail!("either --asset or --url-template is required"),
            };
            let mut mapping = ReleaseMapping::new(locator);
            if let Some(prefix) = tag_prefix {
                mapping = mapping.with_tag_prefix(prefix);
            }

            GitHubSource::new(fetcher, &config.api_url, &repo, mapping)
                .with_max_pages(config.max_pages)
                .resolve(version.as_deref())
                .await?
        }
    };

    Ok(binary)
}

/// Renders a resolved binary as pretty JSON
pub fn render(binary: &ExternalBinary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(binary)?)
}
