use std::process::ExitCode;

use tracing::{error, info, span, Instrument, Level};

mod adapters;
mod config;
mod model;
mod uploader;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::INFO, "main", context = "main");

    async {
        info!("called");

        let config = match config::Config::from_env() {
            Err(err) => {
                error!(error_message=%err, error_group="config");
                return ExitCode::FAILURE;
            }
            Ok(config) => config,
        };
        info!(
            source_dir=%config.source_dir.display(),
            bucket=%config.bucket,
            delay_secs=config.delay.as_secs(),
            "config"
        );

        let sdk_config = aws_config::load_from_env().await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        let mut uploader = uploader::Uploader::new(Box::new(client), config);
        match uploader.run().await {
            Err(err) => {
                error!(error_message=%err, error_group="list_directory");
                ExitCode::FAILURE
            }
            Ok(_) => ExitCode::SUCCESS,
        }
    }
    .instrument(span)
    .await
}
