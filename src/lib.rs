//! Hospital Finder E2E Tester
//!
//! Drives a Chrome session through the hospital finder web app's registration,
//! login and hospital-search pages and reports a pass/fail line per scenario.
//! The application under test is expected to be running at the configured base URL.

pub mod browser;
pub mod report;
pub mod runner;

use std::path::PathBuf;
use std::time::Duration;

/// Base URL used when neither the CLI argument nor the env var is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Runner configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    /// Base URL of the application under test
    pub base_url: String,
    /// Run Chrome in headless mode
    pub headless: bool,
    /// Explicit Chrome/Chromium binary path (auto-detected if unset)
    pub chrome_path: Option<String>,
    /// Timeout for element-presence waits, in seconds
    pub implicit_wait_secs: u64,
    /// Timeout for condition waits (URL change, text appearing), in seconds
    pub explicit_wait_secs: u64,
    /// Window in which the form-validation scenario watches for an
    /// unexpected navigation, in milliseconds
    pub settle_ms: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: false,
            chrome_path: None,
            implicit_wait_secs: 10,
            explicit_wait_secs: 20,
            settle_ms: 2000,
        }
    }
}

impl RunnerConfig {
    /// Build config from environment variables:
    /// - `HOSPITAL_E2E_BASE_URL` - target application base URL
    /// - `HOSPITAL_E2E_HEADLESS` - "true"/"1" to run headless
    /// - `HOSPITAL_E2E_CHROME` - explicit browser binary path
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("HOSPITAL_E2E_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        config.headless = std::env::var("HOSPITAL_E2E_HEADLESS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        config.chrome_path = std::env::var("HOSPITAL_E2E_CHROME")
            .ok()
            .filter(|p| !p.is_empty());

        config
    }

    /// Build config from the environment, letting a positional CLI argument
    /// override the base URL.
    pub fn from_env_and_args() -> Self {
        let mut config = Self::from_env();
        if let Some(base_url) = std::env::args().nth(1) {
            config.base_url = base_url;
        }
        config
    }

    /// Absolute URL for an application route, e.g. `/register`.
    pub fn route_url(&self, route: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route)
    }

    /// Element-presence wait timeout
    pub fn implicit_wait(&self) -> Duration {
        Duration::from_secs(self.implicit_wait_secs)
    }

    /// Condition wait timeout
    pub fn explicit_wait(&self) -> Duration {
        Duration::from_secs(self.explicit_wait_secs)
    }

    /// Negative-wait window for the validation scenario
    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

/// Check whether a browser URL is on the given application route.
/// Parses the URL and compares paths, so `/register?step=2` counts as
/// `/register` but `http://host/?from=/register` does not.
pub fn url_on_route(current_url: &str, route: &str) -> bool {
    match url::Url::parse(current_url) {
        Ok(parsed) => {
            let path = parsed.path();
            path == route || path.starts_with(&format!("{}/", route))
        }
        // about:blank and friends never sit on an app route
        Err(_) => false,
    }
}

/// Get log directory path (shared across modules)
pub fn log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hospital-e2e").join("logs"))
}

/// Initialize logging: console layer plus a daily-rolling file layer when a
/// config directory is available.
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false);

    if let Some(log_dir) = log_dir() {
        let _ = std::fs::create_dir_all(&log_dir);
        let file_appender = tracing_appender::rolling::daily(&log_dir, "hospital-e2e.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(non_blocking);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.base_url, "http://localhost:5173");
        assert!(!config.headless);
        assert_eq!(config.implicit_wait(), Duration::from_secs(10));
        assert_eq!(config.explicit_wait(), Duration::from_secs(20));
        assert_eq!(config.settle_window(), Duration::from_millis(2000));
    }

    #[test]
    fn test_route_url_joins_without_double_slash() {
        let mut config = RunnerConfig::default();
        config.base_url = "http://localhost:5173/".to_string();
        assert_eq!(config.route_url("/register"), "http://localhost:5173/register");

        config.base_url = "http://app.example.com".to_string();
        assert_eq!(config.route_url("/hospitals"), "http://app.example.com/hospitals");
    }

    #[test]
    fn test_url_on_route() {
        assert!(url_on_route("http://localhost:5173/register", "/register"));
        assert!(url_on_route("http://localhost:5173/register?step=2", "/register"));
        assert!(url_on_route("http://localhost:5173/hospitals/42", "/hospitals"));
        assert!(!url_on_route("http://localhost:5173/", "/register"));
        assert!(!url_on_route("http://localhost:5173/?from=/register", "/register"));
        assert!(!url_on_route("http://localhost:5173/registered", "/register"));
        assert!(!url_on_route("about:blank", "/register"));
    }
}
