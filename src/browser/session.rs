//! Browser session management
//!
//! Handles launching and controlling the Chrome instance under test control.
//! The session owns the browser exclusively for the duration of one run and
//! is closed exactly once by the orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::browser::HeadlessMode;
use chromiumoxide::cdp::browser_protocol::network::ClearBrowserCookiesParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::BrowserError;

/// Find Chrome/Chromium executable on the system
fn find_chrome() -> Option<std::path::PathBuf> {
    let candidates: Vec<std::path::PathBuf> = if cfg!(target_os = "windows") {
        let mut paths = vec![
            std::path::PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            std::path::PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            paths.push(std::path::PathBuf::from(format!(
                r"{}\Google\Chrome\Application\chrome.exe",
                local
            )));
        }
        paths
    } else if cfg!(target_os = "macos") {
        vec![std::path::PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        )]
    } else {
        vec![
            std::path::PathBuf::from("/usr/bin/google-chrome"),
            std::path::PathBuf::from("/usr/bin/google-chrome-stable"),
            std::path::PathBuf::from("/usr/bin/chromium"),
            std::path::PathBuf::from("/usr/bin/chromium-browser"),
        ]
    };

    candidates.into_iter().find(|p| p.exists())
}

/// Configuration for a browser session
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserSessionConfig {
    /// Path to Chrome/Chromium executable
    pub chrome_path: Option<String>,
    /// Run in headless mode
    pub headless: bool,
    /// User data directory
    pub user_data_dir: Option<String>,
    /// CDP request timeout in seconds
    pub timeout_secs: u64,
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
}

impl Default for BrowserSessionConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: false,
            user_data_dir: None,
            timeout_secs: 60,
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl BrowserSessionConfig {
    /// Create config for one test run with a fresh data directory
    pub fn for_run() -> Self {
        let user_data_dir = std::env::temp_dir()
            .join("hospital-e2e")
            .join("browser_data")
            .join(uuid::Uuid::new_v4().to_string())
            .to_string_lossy()
            .to_string();

        Self {
            user_data_dir: Some(user_data_dir),
            ..Default::default()
        }
    }

    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set Chrome path
    pub fn chrome_path(mut self, path: Option<String>) -> Self {
        self.chrome_path = path;
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// A browser session for the workflow tests
pub struct BrowserSession {
    /// Display name for log lines
    pub id: String,
    /// The browser instance
    browser: Arc<RwLock<Option<Browser>>>,
    /// Current active page
    page: Arc<RwLock<Option<Page>>>,
    /// Whether session is alive
    alive: Arc<AtomicBool>,
}

impl BrowserSession {
    /// Launch Chrome with the given config and attach to its first tab.
    pub async fn new(config: BrowserSessionConfig) -> Result<Self, BrowserError> {
        let session_id = "e2e-session".to_string();

        info!(
            "Launching browser session {} (headless: {})",
            session_id, config.headless
        );

        if config.chrome_path.is_none() && find_chrome().is_none() {
            return Err(BrowserError::LaunchFailed(
                "Chrome/Chromium not found. Install Chrome or set HOSPITAL_E2E_CHROME.".to_string(),
            ));
        }

        let mut builder = BrowserConfig::builder();

        if config.headless {
            // Modern Chrome requires --headless=new for proper headless
            builder = builder.headless_mode(HeadlessMode::New);
        } else {
            builder = builder.with_head();
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        } else if let Some(chrome_path) = find_chrome() {
            info!("Auto-detected Chrome at: {}", chrome_path.display());
            builder = builder.chrome_executable(chrome_path);
        }

        if let Some(ref dir) = config.user_data_dir {
            let _ = std::fs::create_dir_all(dir);
            builder = builder.user_data_dir(dir);
        }

        // Relaxed security flags for local automated testing. Web security is
        // off so the frontend dev server can talk to the API without CORS
        // getting in the way of the run.
        builder = builder
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-web-security")
            .arg("--disable-features=VizDisplayCompositor")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .window_size(config.window_width, config.window_height)
            .request_timeout(Duration::from_secs(config.timeout_secs));

        let browser_config = builder
            .build()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // Spawn handler in background - when it ends, Chrome has disconnected
        let session_id_clone = session_id.clone();
        let alive_flag = Arc::new(AtomicBool::new(true));
        let alive_for_handler = alive_flag.clone();
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
            warn!(
                "Session {} Chrome disconnected (event handler ended)",
                session_id_clone
            );
            alive_for_handler.store(false, Ordering::Relaxed);
        });

        // Take the tab Chrome opens on startup, closing any extras
        let page = {
            let mut pages = browser
                .pages()
                .await
                .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

            let main_page = if !pages.is_empty() {
                pages.remove(0)
            } else {
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?
            };

            for extra_page in pages {
                debug!("Closing extra blank tab");
                let _ = extra_page.close().await;
            }

            main_page
        };

        info!("Browser session {} created", session_id);

        Ok(Self {
            id: session_id,
            browser: Arc::new(RwLock::new(Some(browser))),
            page: Arc::new(RwLock::new(Some(page))),
            alive: alive_flag,
        })
    }

    /// Check if the session is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Navigate to a URL
    pub async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        debug!("Session {} navigating to: {}", self.id, url);
        page.goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    /// Get current URL
    pub async fn current_url(&self) -> Result<String, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        page.url()
            .await
            .map_err(|e| BrowserError::ConnectionLost(e.to_string()))?
            .ok_or_else(|| BrowserError::ConnectionLost("No URL".into()))
    }

    /// Execute JavaScript on the page with default 30 second timeout
    pub async fn execute_js(&self, script: &str) -> Result<serde_json::Value, BrowserError> {
        self.execute_js_with_timeout(script, 30).await
    }

    /// Execute JavaScript on the page with custom timeout (in seconds)
    pub async fn execute_js_with_timeout(
        &self,
        script: &str,
        timeout_secs: u64,
    ) -> Result<serde_json::Value, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let result = tokio::time::timeout(Duration::from_secs(timeout_secs), page.evaluate(script))
            .await
            .map_err(|_| {
                BrowserError::Timeout(format!(
                    "JavaScript execution timed out after {}s",
                    timeout_secs
                ))
            })?
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(result.value().cloned().unwrap_or(serde_json::Value::Null))
    }

    /// Click on an element by selector
    pub async fn click(&self, selector: &str) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let element = page
            .find_element(selector)
            .await
            .map_err(|e| BrowserError::ElementNotFound(format!("{}: {}", selector, e)))?;

        element
            .click()
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(())
    }

    /// Type text into an element. Uses CDP key events so framework-controlled
    /// inputs (React) receive real input events, not just a value assignment.
    pub async fn type_into(&self, selector: &str, text: &str) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let element = page
            .find_element(selector)
            .await
            .map_err(|e| BrowserError::ElementNotFound(format!("{}: {}", selector, e)))?;

        element.click().await.ok();
        element
            .focus()
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;
        element
            .type_str(text)
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(())
    }

    /// Inner text of the first element matching the selector, if present.
    pub async fn element_text(&self, selector: &str) -> Result<Option<String>, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let element = match page.find_element(selector).await {
            Ok(element) => element,
            Err(_) => return Ok(None),
        };

        element
            .inner_text()
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))
    }

    /// Number of elements matching the selector.
    pub async fn element_count(&self, selector: &str) -> Result<usize, BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        let elements = page
            .find_elements(selector)
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(elements.len())
    }

    /// Visible text of the whole page body.
    pub async fn page_text(&self) -> Result<String, BrowserError> {
        let result = self
            .execute_js("document.body ? document.body.innerText : ''")
            .await?;
        Ok(result.as_str().unwrap_or_default().to_string())
    }

    /// Delete all cookies for the session.
    pub async fn clear_cookies(&self) -> Result<(), BrowserError> {
        let page = self.page.read().await;
        let page = page
            .as_ref()
            .ok_or(BrowserError::ConnectionLost("No active page".into()))?;

        page.execute(ClearBrowserCookiesParams::default())
            .await
            .map_err(|e| BrowserError::JavaScriptError(e.to_string()))?;

        Ok(())
    }

    /// Close the browser session
    pub async fn close(&self) -> Result<(), BrowserError> {
        // Mark as not alive first to prevent new operations
        self.alive.store(false, Ordering::Relaxed);

        // 1. Close page first (stops navigation/JS execution)
        {
            let mut page = self.page.write().await;
            if let Some(p) = page.take() {
                let _ = p.close().await;
            }
        }

        // 2. Close browser - graceful close, brief grace period, then force kill
        {
            let mut browser = self.browser.write().await;
            if let Some(mut b) = browser.take() {
                let _ = b.close().await;
                tokio::time::sleep(Duration::from_millis(500)).await;
                let _ = b.kill().await;
            }
        }

        info!("Browser session {} closed", self.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let config = BrowserSessionConfig::default()
            .headless(true)
            .chrome_path(Some("/opt/chrome".into()))
            .timeout(90);

        assert!(config.headless);
        assert_eq!(config.chrome_path.as_deref(), Some("/opt/chrome"));
        assert_eq!(config.timeout_secs, 90);
    }

    #[test]
    fn test_for_run_gets_unique_data_dir() {
        let a = BrowserSessionConfig::for_run();
        let b = BrowserSessionConfig::for_run();

        assert!(a.user_data_dir.is_some());
        assert_ne!(a.user_data_dir, b.user_data_dir);
    }
}
