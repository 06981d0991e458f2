use super::client::build_client;
use super::headers::headers_for_profile;
use super::types::{FetchRequest, FetchResponse, Method, RequestKind};
use super::utils::{body_for_kind, parse_cookie_header};
use super::Transport;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::session::{Cookie, Session};
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::multipart::Form;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Plain HTTP transport on a shared reqwest client.
///
/// The pooled client keeps no cookies. A session's cookies go out as an
/// explicit `Cookie` header and the cookies a response sets are handed back
/// on it, so concurrent sessions never see each other's state. Login requests
/// run on a one-off client with a jar seeded from the session, which keeps
/// cookies set along the redirect chain.
pub struct ReqwestTransport {
    client: Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self {
            client: build_client(config, None)?,
            config: config.clone(),
        })
    }

    /// A client whose jar starts with `session` and lives for one request.
    fn login_client(
        &self,
        url: &Url,
        session: Option<&Session>,
    ) -> Result<(Client, Arc<Jar>), TransportError> {
        let jar = Arc::new(Jar::default());
        for cookie in session.map(Session::cookies).unwrap_or_default() {
            jar.add_cookie_str(&format!("{}={}; Path=/", cookie.name, cookie.value), url);
        }
        let client = build_client(&self.config, Some(Arc::clone(&jar)))?;
        Ok((client, jar))
    }
}

fn network_error(url: &str, e: reqwest::Error) -> TransportError {
    let reason = if e.is_timeout() {
        "timeout".to_string()
    } else if e.is_connect() {
        format!("connect: {e}")
    } else {
        e.to_string()
    };
    TransportError::Network {
        url: url.to_string(),
        reason,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(
        &self,
        request: FetchRequest,
        session: Option<&Session>,
    ) -> Result<FetchResponse, TransportError> {
        let url = Url::parse(&request.url).map_err(|e| TransportError::Network {
            url: request.url.clone(),
            reason: format!("invalid url: {e}"),
        })?;

        let mut headers = headers_for_profile(self.config.profile);
        let login = match request.kind {
            RequestKind::Login => Some(self.login_client(&url, session)?),
            _ => {
                if let Some(session) = session.filter(|s| !s.is_empty()) {
                    if let Ok(value) = HeaderValue::from_str(&session.cookie_header()) {
                        headers.insert(COOKIE, value);
                    }
                }
                None
            }
        };
        let client = login.as_ref().map(|(c, _)| c).unwrap_or(&self.client);

        let builder = match request.method {
            Method::Get => client.get(url.clone()).query(&request.params),
            Method::Post => {
                let form = request
                    .params
                    .iter()
                    .fold(Form::new(), |form, (k, v)| form.text(k.clone(), v.clone()));
                client.post(url.clone()).multipart(form)
            }
        };

        tracing::debug!(url = %request.url, method = ?request.method, "fetching");
        let response = builder
            .headers(headers)
            .send()
            .await
            .map_err(|e| network_error(&request.url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let set_cookies: Vec<Cookie> = response
            .cookies()
            .map(|c| Cookie::new(c.name(), c.value()))
            .collect();
        let text = response.text().await.map_err(|e| TransportError::Decode {
            url: request.url.clone(),
            reason: e.to_string(),
        })?;

        let cookies = match login {
            Some((_, jar)) => jar
                .cookies(&url)
                .and_then(|v| v.to_str().ok().map(parse_cookie_header))
                .unwrap_or_default(),
            None => set_cookies,
        };

        let body = body_for_kind(request.kind, &request.url, status, final_url, text)?;
        Ok(FetchResponse { body, cookies })
    }
}
