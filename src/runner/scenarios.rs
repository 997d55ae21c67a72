//! The five workflow scenarios
//!
//! Each scenario drives the app through one user workflow and returns a
//! `Result`; the orchestrator turns an `Err` into a failed outcome, so no
//! error escapes past a scenario boundary.

use std::sync::Arc;

use crate::browser::{BrowserError, BrowserSession, PageActions};
use crate::report::{SubCheck, SubCheckStatus};
use crate::runner::credentials::GeneratedCredentials;
use crate::{url_on_route, RunnerConfig};

/// Application routes under test
pub mod routes {
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
    pub const HOSPITALS: &str = "/hospitals";
}

/// Selectors the target application exposes
pub mod selectors {
    pub const SUBMIT_BUTTON: &str = "button[type='submit']";
    pub const HEADING: &str = "h1";
    pub const HOSPITAL_LINKS: &str = "a[href*='/hospitals/']";
    pub const GRID_VIEW_BUTTON: &str = "#grid-view-button";
    pub const MAP_VIEW_BUTTON: &str = "#map-view-button";
}

/// Fixed valid credential pair known to the target app
const VALID_EMAIL: &str = "hasnaenadil@gmail.com";
const VALID_PASSWORD: &str = "adil@101";

const INVALID_EMAIL: &str = "wrong@example.com";
const INVALID_PASSWORD: &str = "wrongpassword";

/// Error oracle for the invalid-login scenario. Weak by construction: any page
/// text containing one of these counts, and the app exposes no dedicated
/// error element to target instead.
const ERROR_KEYWORDS: [&str; 3] = ["invalid", "error", "failed"];

/// Transient submit-button labels while a form is in flight
const REGISTER_SUBMIT_LABEL: &str = "Creating Account...";
const LOGIN_SUBMIT_LABEL: &str = "Logging in...";

const HOSPITALS_HEADING: &str = "Find Hospitals";
const NO_HOSPITALS_MESSAGE: &str = "no hospitals found";
const COUNT_INDICATOR: &str = "showing";

/// Scenario implementations
pub struct Scenarios;

impl Scenarios {
    /// Register a fresh account with a generated email and fixed sample data.
    pub async fn registration(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<GeneratedCredentials, BrowserError> {
        println!("🧪 Testing user registration...");

        let creds = GeneratedCredentials::generate();
        println!("📧 Using email: {}", creds.email);

        session.navigate(&config.route_url(routes::REGISTER)).await?;
        PageActions::wait_for_element(session, "[name='name']", config.implicit_wait()).await?;

        PageActions::fill_field(session, "name", "John Doe").await?;
        PageActions::fill_field(session, "email", &creds.email).await?;
        PageActions::fill_field(session, "password", VALID_PASSWORD).await?;
        PageActions::fill_field(session, "address", "123 Main St").await?;
        PageActions::fill_field(session, "thana", "Dhanmondi").await?;
        PageActions::fill_field(session, "po", "Dhanmondi PO").await?;
        PageActions::fill_field(session, "city", "Dhaka").await?;
        PageActions::fill_field(session, "postalCode", "1205").await?;
        PageActions::fill_field(session, "zoneId", "1").await?;

        session.click(selectors::SUBMIT_BUTTON).await?;

        PageActions::wait_for_element_text(
            session,
            selectors::SUBMIT_BUTTON,
            REGISTER_SUBMIT_LABEL,
            config.explicit_wait(),
        )
        .await?;
        PageActions::wait_for_route_exit(session, routes::REGISTER, config.explicit_wait())
            .await?;

        Ok(creds)
    }

    /// Log in with the fixed valid credentials. Where the app lands afterwards
    /// is informational only - an unexpected landing page is logged, not failed.
    pub async fn login_success(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<(), BrowserError> {
        println!("🧪 Testing successful login...");

        session.navigate(&config.route_url(routes::LOGIN)).await?;
        PageActions::wait_for_element(session, "[name='email']", config.implicit_wait()).await?;

        PageActions::fill_field(session, "email", VALID_EMAIL).await?;
        PageActions::fill_field(session, "password", VALID_PASSWORD).await?;

        session.click(selectors::SUBMIT_BUTTON).await?;

        PageActions::wait_for_element_text(
            session,
            selectors::SUBMIT_BUTTON,
            LOGIN_SUBMIT_LABEL,
            config.explicit_wait(),
        )
        .await?;
        PageActions::wait_for_route_exit(session, routes::LOGIN, config.explicit_wait()).await?;

        let url = session.current_url().await?;
        if url_on_route(&url, routes::HOSPITALS) {
            if let Ok(Some(heading)) = session.element_text(selectors::HEADING).await {
                if heading.contains(HOSPITALS_HEADING) {
                    return Ok(());
                }
            }
        }

        println!("⚠️ Login successful but not redirected to expected page");
        Ok(())
    }

    /// Log in with a known-bad credential pair and wait for the app to render
    /// an error keyword.
    pub async fn login_invalid(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<(), BrowserError> {
        println!("🧪 Testing login with invalid credentials...");

        session.navigate(&config.route_url(routes::LOGIN)).await?;
        PageActions::wait_for_element(session, "[name='email']", config.implicit_wait()).await?;

        PageActions::fill_field(session, "email", INVALID_EMAIL).await?;
        PageActions::fill_field(session, "password", INVALID_PASSWORD).await?;

        session.click(selectors::SUBMIT_BUTTON).await?;

        PageActions::wait_for_page_text_any(session, &ERROR_KEYWORDS, config.explicit_wait())
            .await?;

        Ok(())
    }

    /// Submit both forms empty; client-side validation must keep the browser
    /// on the same route.
    pub async fn form_validation(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<(), BrowserError> {
        println!("🧪 Testing form validation...");

        session.navigate(&config.route_url(routes::REGISTER)).await?;
        PageActions::wait_for_element(session, selectors::SUBMIT_BUTTON, config.implicit_wait())
            .await?;
        session.click(selectors::SUBMIT_BUTTON).await?;

        if PageActions::stays_on_route(session, routes::REGISTER, config.settle_window()).await? {
            println!("✅ Registration validation test passed!");
        } else {
            return Err(BrowserError::NavigationFailed(
                "empty registration form navigated away from /register".into(),
            ));
        }

        session.navigate(&config.route_url(routes::LOGIN)).await?;
        PageActions::wait_for_element(session, selectors::SUBMIT_BUTTON, config.implicit_wait())
            .await?;
        session.click(selectors::SUBMIT_BUTTON).await?;

        if PageActions::stays_on_route(session, routes::LOGIN, config.settle_window()).await? {
            println!("✅ Login validation test passed!");
            Ok(())
        } else {
            Err(BrowserError::NavigationFailed(
                "empty login form navigated away from /login".into(),
            ))
        }
    }

    /// Open the hospital listing and run the three best-effort sub-checks.
    /// Only the heading check is fatal to the scenario.
    pub async fn hospital_search(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<Vec<SubCheck>, BrowserError> {
        println!("🧪 Testing hospital search workflow...");

        session.navigate(&config.route_url(routes::HOSPITALS)).await?;
        PageActions::wait_for_element(session, selectors::HEADING, config.explicit_wait()).await?;

        let heading = session
            .element_text(selectors::HEADING)
            .await?
            .unwrap_or_default();
        if !heading.contains(HOSPITALS_HEADING) {
            return Err(BrowserError::ElementNotFound(format!(
                "hospital page heading '{}', got '{}'",
                HOSPITALS_HEADING, heading
            )));
        }
        println!("✅ Hospital page loaded successfully");

        let mut sub_checks = Vec::new();

        println!("  📋 Testing hospital display...");
        let display = Self::probe_hospital_display(session).await.unwrap_or_else(|e| {
            println!("    ⚠️ Could not verify hospital display: {}", e);
            SubCheck::new("hospital display", SubCheckStatus::Skipped, Some(e.to_string()))
        });
        sub_checks.push(display);

        println!("  🔄 Testing view switching...");
        let toggle = Self::probe_view_toggle(session, config).await.unwrap_or_else(|e| {
            println!("    ⚠️ View switching test skipped: {}", e);
            SubCheck::new("view switching", SubCheckStatus::Skipped, Some(e.to_string()))
        });
        sub_checks.push(toggle);

        println!("  📊 Testing hospital count display...");
        let count = Self::probe_hospital_count(session).await.unwrap_or_else(|e| {
            println!("    ⚠️ Could not verify hospital count: {}", e);
            SubCheck::new("hospital count", SubCheckStatus::Skipped, Some(e.to_string()))
        });
        sub_checks.push(count);

        Ok(sub_checks)
    }

    /// Either hospital result links exist or the explicit empty-state message
    /// is shown; anything else is a (non-fatal) sub-check failure.
    async fn probe_hospital_display(
        session: &Arc<BrowserSession>,
    ) -> Result<SubCheck, BrowserError> {
        let links = session.element_count(selectors::HOSPITAL_LINKS).await?;
        if links > 0 {
            println!("    ✅ Found {} hospital cards", links);
            return Ok(SubCheck::new(
                "hospital display",
                SubCheckStatus::Passed,
                Some(format!("{} hospital cards", links)),
            ));
        }

        let text = session.page_text().await?;
        if text.to_lowercase().contains(NO_HOSPITALS_MESSAGE) {
            println!("    ✅ No hospitals message displayed");
            Ok(SubCheck::new(
                "hospital display",
                SubCheckStatus::Passed,
                Some("no hospitals message".into()),
            ))
        } else {
            println!("    ⚠️ No hospital cards or message found");
            Ok(SubCheck::new(
                "hospital display",
                SubCheckStatus::Failed,
                None,
            ))
        }
    }

    /// Toggle map view then grid view. Switching to map re-renders the
    /// listing, so the grid button must be found again afterwards.
    async fn probe_view_toggle(
        session: &Arc<BrowserSession>,
        config: &RunnerConfig,
    ) -> Result<SubCheck, BrowserError> {
        let grid = session.element_count(selectors::GRID_VIEW_BUTTON).await?;
        let map = session.element_count(selectors::MAP_VIEW_BUTTON).await?;
        if grid == 0 || map == 0 {
            println!("    ⚠️ View switching buttons not present");
            return Ok(SubCheck::new(
                "view switching",
                SubCheckStatus::Skipped,
                Some("view buttons not present".into()),
            ));
        }
        println!("    ✅ View switching buttons found");

        session.click(selectors::MAP_VIEW_BUTTON).await?;
        PageActions::wait_for_element(session, selectors::GRID_VIEW_BUTTON, config.implicit_wait())
            .await?;
        println!("    ✅ Switched to map view");

        session.click(selectors::GRID_VIEW_BUTTON).await?;
        PageActions::wait_for_element(session, selectors::MAP_VIEW_BUTTON, config.implicit_wait())
            .await?;
        println!("    ✅ Switched back to grid view");

        Ok(SubCheck::new("view switching", SubCheckStatus::Passed, None))
    }

    /// Result-count indicator ("Showing N hospitals") somewhere in the page text.
    async fn probe_hospital_count(
        session: &Arc<BrowserSession>,
    ) -> Result<SubCheck, BrowserError> {
        let text = session.page_text().await?;
        if text.to_lowercase().contains(COUNT_INDICATOR) {
            println!("    ✅ Hospital count information found");
            Ok(SubCheck::new(
                "hospital count",
                SubCheckStatus::Passed,
                None,
            ))
        } else {
            println!("    ⚠️ Hospital count not displayed");
            Ok(SubCheck::new(
                "hospital count",
                SubCheckStatus::Failed,
                None,
            ))
        }
    }
}
