use graph_beta_models::app_config::AppConfig;
use graph_beta_models::loader::verify_directory;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let report = verify_directory(config.corpus().directory(), config.corpus().extension()).await?;
    let drifted = report.drifted().count();

    if report.is_success() {
        info!(
            "✅  Verified {} payloads, {} of them not fully typed",
            report.verified.len(),
            drifted
        );
        Ok(ExitCode::SUCCESS)
    } else {
        error!("❌ {} of {} payloads failed to verify", report.failed, report.failed + report.verified.len());
        Ok(ExitCode::FAILURE)
    }
}
