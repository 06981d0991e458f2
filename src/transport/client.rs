use crate::config::ClientConfig;
use crate::error::TransportError;
use reqwest::cookie::Jar;
use reqwest::{redirect, Client};
use std::sync::Arc;
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

/// Build a reqwest client for BoxRec requests.
///
/// The pooled client shared by every session gets no jar: cookies travel in
/// an explicit header per request. Login passes a jar of its own so cookies
/// set on redirect hops are kept.
pub(crate) fn build_client(
    config: &ClientConfig,
    jar: Option<Arc<Jar>>,
) -> Result<Client, TransportError> {
    let mut builder = Client::builder()
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(config.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC));
    if let Some(jar) = jar {
        builder = builder.cookie_provider(jar);
    }
    builder.build().map_err(|e| TransportError::Network {
        url: config.base_url.clone(),
        reason: format!("failed to build client: {e}"),
    })
}
