//! Parameter wrapping
//!
//! BoxRec names its query keys after the form that submits them
//! (`pf[first_name]`, `r[division]`). The prefix changes without notice, so it
//! is read from the live form once per family and cached.

pub mod types;

pub use types::*;

use crate::config::ClientConfig;
use crate::error::{BoxrecError, Result};
use crate::html::extract_form_name;
use crate::session::Session;
use crate::transport::{FetchRequest, Transport};
use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Family → prefix tokens, shared by every call a client makes.
#[derive(Debug, Default)]
pub struct ParamWrapCache {
    tokens: DashMap<WrapFamily, String>,
}

impl ParamWrapCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a token so the family never needs priming.
    pub fn with_token(self, family: WrapFamily, token: &str) -> Self {
        self.tokens.insert(family, token.to_string());
        self
    }

    pub fn get(&self, family: WrapFamily) -> Option<String> {
        self.tokens.get(&family).map(|t| t.value().clone())
    }

    /// Cached token for `family`, priming it from the live form on first use.
    ///
    /// No lock is held across the fetch: two first calls may both prime and
    /// the last write wins.
    pub async fn resolve(
        &self,
        family: WrapFamily,
        transport: &dyn Transport,
        session: Option<&Session>,
        config: &ClientConfig,
    ) -> Result<String> {
        if let Some(token) = self.get(family) {
            return Ok(token);
        }

        let url = config.url(family.priming_path());
        debug!(family = ?family, url = %url, "priming parameter wrap");
        let html = transport
            .fetch(FetchRequest::get(url), session)
            .await?
            .into_text();

        let token = extract_form_name(&html, &family.locator());
        if token.is_empty() {
            warn!(
                family = ?family,
                fallback = family.default_prefix(),
                "no form found on priming page, using default prefix"
            );
            return Ok(family.default_prefix().to_string());
        }

        self.tokens.insert(family, token.clone());
        Ok(token)
    }
}

fn value_to_param(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        other => Some(other.to_string()),
    }
}

/// Turn every present field of `record` into `prefix[field]`, then append `offset`.
pub fn wrap_params<P: Serialize>(
    prefix: &str,
    record: &P,
    offset: u32,
) -> Result<Vec<(String, String)>> {
    let Value::Object(fields) = serde_json::to_value(record)? else {
        return Err(BoxrecError::InvalidParams(
            "parameter record must serialize to an object".to_string(),
        ));
    };

    let mut params: Vec<(String, String)> = fields
        .iter()
        .filter_map(|(key, value)| {
            value_to_param(value).map(|v| (format!("{prefix}[{key}]"), v))
        })
        .collect();
    params.push(("offset".to_string(), offset.to_string()));
    Ok(params)
}
