//! RegimA Insights - scheduled report generation entry point.
//!
//! Reads `REGIMA__*` configuration and the `ANALYSIS_TYPE` token, runs one
//! report generation and exits with a status derived from the outcome.

use std::sync::Arc;

use regima_insights::adapters::{JsonFileTrackingSource, LocalReportStorage, TemplateReportRenderer};
use regima_insights::application::handlers::{EXIT_CONFIGURATION, EXIT_SUCCESS};
use regima_insights::application::{GenerateReportCommand, GenerateReportHandler};
use regima_insights::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use regima_insights::domain::analysis::AnalyzerRegistry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

async fn run() -> i32 {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            tracing::error!(error = %e, "Invalid configuration");
            return EXIT_CONFIGURATION;
        }
    };
    init_tracing(&config.logging);

    let handler = GenerateReportHandler::new(
        Arc::new(JsonFileTrackingSource::from_config(&config.paths)),
        Arc::new(AnalyzerRegistry::standard()),
        Arc::new(TemplateReportRenderer::new()),
        Arc::new(LocalReportStorage::new(config.paths.output_dir.clone())),
    );
    let cmd = GenerateReportCommand::new(config.analysis_token());

    match handler.handle(cmd).await {
        Ok(result) => {
            for file in &result.persisted.files {
                tracing::info!(
                    path = %file.path.display(),
                    checksum = %file.checksum,
                    "Report file ready"
                );
            }
            tracing::info!(
                status = %result.report.summary().status,
                headline = %result.report.summary().headline,
                "Report generation complete"
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, "Report generation failed");
            e.exit_code()
        }
    }
}

#[tokio::main]
async fn main() {
    let code = run().await;
    std::process::exit(code);
}
