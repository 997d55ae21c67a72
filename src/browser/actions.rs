//! Page-level actions for the workflow scenarios
//!
//! Every wait here is a bounded polling wait on a DOM condition. The original
//! script interleaved fixed sleeps; those are replaced with condition waits so
//! a healthy app is never waited on longer than it needs.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use super::{BrowserError, BrowserSession};
use crate::url_on_route;

/// Interval between condition probes
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Page actions shared by the scenarios
pub struct PageActions;

impl PageActions {
    /// Navigate to a neutral page and clear cookies plus local/session storage.
    /// Storage APIs are unavailable on some pages, so storage failures are
    /// swallowed - their absence is not a test signal.
    pub async fn reset_state(session: &Arc<BrowserSession>) -> Result<(), BrowserError> {
        session.navigate("about:blank").await?;
        session.clear_cookies().await?;

        if let Err(e) = session
            .execute_js("window.localStorage.clear(); window.sessionStorage.clear(); true")
            .await
        {
            debug!("Session {} storage clear skipped: {}", session.id, e);
        }

        Ok(())
    }

    /// Wait until at least one element matches the selector.
    pub async fn wait_for_element(
        session: &Arc<BrowserSession>,
        selector: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let deadline = Instant::now() + timeout;
        loop {
            if session.element_count(selector).await.unwrap_or(0) > 0 {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "no element matched '{}' within {:?}",
                    selector, timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until the first element matching the selector contains the text.
    pub async fn wait_for_element_text(
        session: &Arc<BrowserSession>,
        selector: &str,
        needle: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(Some(text)) = session.element_text(selector).await {
                if text.contains(needle) {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "'{}' never showed text '{}' within {:?}",
                    selector, needle, timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until the browser URL is no longer on the given application route.
    pub async fn wait_for_route_exit(
        session: &Arc<BrowserSession>,
        route: &str,
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let deadline = Instant::now() + timeout;
        loop {
            let url = session.current_url().await?;
            if !url_on_route(&url, route) {
                debug!("Session {} left route {} for {}", session.id, route, url);
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "URL did not leave {} within {:?}",
                    route, timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Watch the URL for the given window and report whether it stayed on the
    /// route the whole time. Used by the validation scenario, where navigating
    /// away is the failure.
    pub async fn stays_on_route(
        session: &Arc<BrowserSession>,
        route: &str,
        window: Duration,
    ) -> Result<bool, BrowserError> {
        let deadline = Instant::now() + window;
        loop {
            let url = session.current_url().await?;
            if !url_on_route(&url, route) {
                return Ok(false);
            }
            if Instant::now() >= deadline {
                return Ok(true);
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait until the rendered page text contains any of the keywords
    /// (case-insensitive).
    pub async fn wait_for_page_text_any(
        session: &Arc<BrowserSession>,
        keywords: &[&str],
        timeout: Duration,
    ) -> Result<(), BrowserError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(text) = session.page_text().await {
                if text_contains_any(&text, keywords) {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "page text showed none of {:?} within {:?}",
                    keywords, timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Fill a named form field.
    pub async fn fill_field(
        session: &Arc<BrowserSession>,
        name: &str,
        value: &str,
    ) -> Result<(), BrowserError> {
        let selector = format!("[name='{}']", name);
        session.type_into(&selector, value).await
    }
}

/// Case-insensitive "page text contains any keyword" oracle.
pub fn text_contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contains_any_is_case_insensitive() {
        let keywords = ["invalid", "error", "failed"];

        assert!(text_contains_any("Login FAILED, try again", &keywords));
        assert!(text_contains_any("Invalid email or password", &keywords));
        assert!(!text_contains_any("Welcome back!", &keywords));
        assert!(!text_contains_any("", &keywords));
    }
}
