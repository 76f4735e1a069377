use std::process::ExitCode;

use binary_source::cli::{self, Cli};
use binary_source::config::{self, Config};
use binary_source::log;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match log::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "Logging to {} disabled: {}",
                config::log_path().display(),
                e
            );
            None
        }
    };

    let config = Config::from_env();

    match cli::run(cli, &config).await {
        Ok(Some(binary)) => match cli::render(&binary) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        Ok(None) => {
            eprintln!("No release matches the requested version");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("Resolution failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
