use super::profile::FetchProfile;
use super::types::{FetchRequest, FetchResponse, Method};
use super::utils::{body_for_kind, with_query};
use super::Transport;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::session::{Cookie, Session};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptionsBuilder, Tab};
use serde::Deserialize;
use std::ffi::OsString;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::{debug, warn};

const CHALLENGE_WAIT_MS: u64 = 3000;

/// Transport that drives a real headless Chrome, for when BoxRec serves
/// challenge pages to plain HTTP clients.
///
/// One browser is shared; every request gets its own tab which is closed on
/// every exit path.
#[derive(Clone)]
pub struct BrowserTransport {
    browser: Arc<Mutex<Browser>>,
    origin: String,
    user_agent: &'static str,
}

fn browser_error(e: impl std::fmt::Display) -> TransportError {
    TransportError::Browser(e.to_string())
}

fn launch(user_agent: &str) -> Result<Browser, TransportError> {
    let ua_arg = OsString::from(format!("--user-agent={user_agent}"));
    let options = LaunchOptionsBuilder::default()
        .headless(true)
        .window_size(Some((1280, 800)))
        .args(vec![
            std::ffi::OsStr::new("--disable-blink-features=AutomationControlled"),
            ua_arg.as_os_str(),
        ])
        .build()
        .map_err(browser_error)?;
    Browser::new(options).map_err(browser_error)
}

/// Shape returned by the in-page `fetch` used for POSTs.
#[derive(Deserialize)]
struct PostResult {
    status: u16,
    url: String,
    body: String,
}

impl BrowserTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let user_agent = match config.profile {
            FetchProfile::Minimal => FetchProfile::Windows.user_agent(),
            p => p.user_agent(),
        };
        Ok(Self {
            browser: Arc::new(Mutex::new(launch(user_agent)?)),
            origin: config.origin(),
            user_agent,
        })
    }

    async fn open_tab(&self) -> Result<Arc<Tab>, TransportError> {
        let mut browser = self.browser.lock().await;
        match browser.new_tab() {
            Ok(tab) => Ok(tab),
            Err(e) => {
                warn!("failed to create tab, relaunching browser: {}", e);
                *browser = launch(self.user_agent)?;
                browser.new_tab().map_err(browser_error)
            }
        }
    }

    async fn drive(
        &self,
        tab: &Tab,
        request: &FetchRequest,
        cookies: &[Cookie],
    ) -> Result<FetchResponse, TransportError> {
        if !cookies.is_empty() {
            // Cookies can only be written once the tab is on the site's origin
            tab.navigate_to(&self.origin).map_err(browser_error)?;
            tab.wait_until_navigated().map_err(browser_error)?;
            for cookie in cookies {
                let assignment = serde_json::to_string(&format!(
                    "{}={}; path=/",
                    cookie.name, cookie.value
                ))
                .map_err(browser_error)?;
                tab.evaluate(&format!("document.cookie = {assignment};"), false)
                    .map_err(browser_error)?;
            }
        }

        let (status, final_url, text) = match request.method {
            Method::Get => {
                let url = with_query(&request.url, &request.params)?;
                tab.navigate_to(&url).map_err(browser_error)?;
                tab.wait_until_navigated().map_err(browser_error)?;
                wait_for_challenge(tab).await;
                let html = tab.get_content().map_err(browser_error)?;
                // Navigation does not expose the status code, a rendered page counts as 200
                (200, tab.get_url(), html)
            }
            Method::Post => {
                if cookies.is_empty() {
                    tab.navigate_to(&self.origin).map_err(browser_error)?;
                    tab.wait_until_navigated().map_err(browser_error)?;
                }
                let result = post_in_page(tab, request)?;
                (result.status, result.url, result.body)
            }
        };

        let cookies = tab
            .get_cookies()
            .map_err(browser_error)?
            .into_iter()
            .map(|c| Cookie::new(&c.name, &c.value))
            .collect();

        let body = body_for_kind(request.kind, &request.url, status, final_url, text)?;
        Ok(FetchResponse { body, cookies })
    }
}

fn post_in_page(tab: &Tab, request: &FetchRequest) -> Result<PostResult, TransportError> {
    let url = serde_json::to_string(&request.url).map_err(browser_error)?;
    let fields = serde_json::to_string(&request.params).map_err(browser_error)?;
    let script = format!(
        "(async () => {{
            const form = new FormData();
            for (const [k, v] of {fields}) form.append(k, v);
            const res = await fetch({url}, {{ method: 'POST', body: form, credentials: 'include' }});
            return JSON.stringify({{ status: res.status, url: res.url, body: await res.text() }});
        }})()"
    );
    let value = tab
        .evaluate(&script, true)
        .map_err(browser_error)?
        .value
        .ok_or_else(|| TransportError::Browser("in-page fetch returned nothing".to_string()))?;
    let raw = value
        .as_str()
        .ok_or_else(|| TransportError::Browser("in-page fetch returned a non-string".to_string()))?;
    serde_json::from_str(raw).map_err(|e| TransportError::Decode {
        url: request.url.clone(),
        reason: e.to_string(),
    })
}

/// Give an interstitial challenge one chance to clear itself.
async fn wait_for_challenge(tab: &Tab) {
    let is_challenge = tab
        .evaluate(
            "document.title.includes('Just a moment') || document.title.includes('Verifying') || !!document.querySelector('#challenge-form')",
            false,
        )
        .ok()
        .and_then(|r| r.value)
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    if is_challenge {
        debug!("challenge page detected, waiting");
        sleep(Duration::from_millis(CHALLENGE_WAIT_MS)).await;
        let _ = tab.wait_until_navigated();
    }
}

#[async_trait]
impl Transport for BrowserTransport {
    fn name(&self) -> &'static str {
        "headless_chrome"
    }

    async fn fetch(
        &self,
        request: FetchRequest,
        session: Option<&Session>,
    ) -> Result<FetchResponse, TransportError> {
        let cookies = session.map(|s| s.cookies().to_vec()).unwrap_or_default();
        let tab = self.open_tab().await?;

        let result = self.drive(&tab, &request, &cookies).await;

        // Always close the tab, even if there was an error
        let _ = tab.close_target();

        result
    }
}
