//! Workflow orchestration
//!
//! Runs the five scenarios in fixed order against one browser session and
//! guarantees the session is torn down exactly once, whatever the scenarios
//! did. Linear state machine: init, scenarios, teardown. No retries, no
//! cancellation.

pub mod credentials;
pub mod scenarios;

use std::sync::Arc;

use tracing::{info, warn};

use crate::browser::{BrowserError, BrowserSession, BrowserSessionConfig, PageActions};
use crate::report::{RunReport, ScenarioReport};
use crate::RunnerConfig;
use scenarios::Scenarios;

/// Drives the full scenario sequence against one target application instance.
pub struct WorkflowRunner {
    config: RunnerConfig,
    session: Arc<BrowserSession>,
}

impl WorkflowRunner {
    /// Launch the browser session. A failure here is fatal to the whole run.
    pub async fn launch(config: RunnerConfig) -> Result<Self, BrowserError> {
        let session_config = BrowserSessionConfig::for_run()
            .headless(config.headless)
            .chrome_path(config.chrome_path.clone());

        let session = BrowserSession::new(session_config).await?;

        Ok(Self {
            config,
            session: Arc::new(session),
        })
    }

    /// Run all five scenarios, print the summary and close the session.
    pub async fn run_all(self) -> RunReport {
        println!("🚀 Starting Hospital Finder Workflow Tests...");
        println!("🌐 Base URL: {}", self.config.base_url);

        let report = self.run_scenarios().await;

        if let Err(e) = self.session.close().await {
            warn!("Browser teardown error: {}", e);
        }
        println!("🔧 Browser closed.");

        report.print_summary();
        report
    }

    async fn run_scenarios(&self) -> RunReport {
        let mut report = RunReport::default();

        self.reset().await;
        let outcome = match Scenarios::registration(&self.session, &self.config).await {
            Ok(creds) => {
                println!("✅ Registration test passed!");
                ScenarioReport::passed_with_detail("Registration", creds.email)
            }
            Err(e) => {
                println!("❌ Registration test failed: {}", e);
                ScenarioReport::failed("Registration", e.to_string())
            }
        };
        report.push(outcome);

        self.reset().await;
        let outcome = match Scenarios::login_success(&self.session, &self.config).await {
            Ok(()) => {
                println!("✅ Login test passed!");
                ScenarioReport::passed("Login Success")
            }
            Err(e) => {
                println!("❌ Login test failed: {}", e);
                ScenarioReport::failed("Login Success", e.to_string())
            }
        };
        report.push(outcome);

        self.reset().await;
        let outcome = match Scenarios::login_invalid(&self.session, &self.config).await {
            Ok(()) => {
                println!("✅ Invalid credentials test passed!");
                ScenarioReport::passed("Invalid Login")
            }
            Err(e) => {
                println!("❌ Invalid credentials test failed: {}", e);
                ScenarioReport::failed("Invalid Login", e.to_string())
            }
        };
        report.push(outcome);

        self.reset().await;
        let outcome = match Scenarios::form_validation(&self.session, &self.config).await {
            Ok(()) => ScenarioReport::passed("Form Validation"),
            Err(e) => {
                println!("❌ Form validation test failed: {}", e);
                ScenarioReport::failed("Form Validation", e.to_string())
            }
        };
        report.push(outcome);

        self.reset().await;
        let outcome = match Scenarios::hospital_search(&self.session, &self.config).await {
            Ok(sub_checks) => {
                println!("✅ Hospital search workflow test passed!");
                ScenarioReport::passed("Hospital Workflow").with_sub_checks(sub_checks)
            }
            Err(e) => {
                println!("❌ Hospital search workflow test failed: {}", e);
                ScenarioReport::failed("Hospital Workflow", e.to_string())
            }
        };
        report.push(outcome);

        report
    }

    /// Best-effort state reset between scenarios. A failed reset is logged
    /// and the next scenario runs anyway; it will fail on its own terms if
    /// the session is actually unusable.
    async fn reset(&self) {
        if !self.session.is_alive() {
            warn!("Session {} is no longer alive", self.session.id);
        }
        match PageActions::reset_state(&self.session).await {
            Ok(()) => info!("Session {} state reset", self.session.id),
            Err(e) => warn!("Session {} state reset failed: {}", self.session.id, e),
        }
    }
}
