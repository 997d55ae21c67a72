//! Hospital Finder E2E Tester - console entry point
//!
//! Run with: `hospital-e2e [BASE_URL]`
//!
//! Environment variables:
//! - `HOSPITAL_E2E_BASE_URL` - target application base URL (default: http://localhost:5173)
//! - `HOSPITAL_E2E_HEADLESS` - "true"/"1" to run Chrome headless
//! - `HOSPITAL_E2E_CHROME` - explicit Chrome/Chromium binary path

use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = e2e_lib::init_logging();

    let config = e2e_lib::RunnerConfig::from_env_and_args();
    info!("Starting hospital-e2e against {}", config.base_url);

    if let Some(dir) = e2e_lib::log_dir() {
        info!("Log files saved to: {}", dir.display());
    }

    let runner = match e2e_lib::runner::WorkflowRunner::launch(config).await {
        Ok(runner) => runner,
        Err(e) => {
            error!("Browser session launch failed: {}", e);
            anyhow::bail!("failed to launch browser session: {}", e);
        }
    };

    runner.run_all().await;

    Ok(())
}
