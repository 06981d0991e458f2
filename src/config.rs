//! Client configuration

use crate::error::{BoxrecError, Result};
use crate::role::{RoleExpectations, RoleVocabulary};
use crate::transport::FetchProfile;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://boxrec.com";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Site origin, without trailing slash.
    pub base_url: String,
    pub locale: String,
    pub timeout_ms: u64,
    pub profile: FetchProfile,
    pub roles: RoleVocabulary,
    pub expectations: RoleExpectations,
    /// Profile resolutions allowed to miss their column expectation before
    /// resolution starts failing. `None` never fails.
    pub failure_budget: Option<u32>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            profile: FetchProfile::default(),
            roles: RoleVocabulary::default(),
            expectations: RoleExpectations::default(),
            failure_budget: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_profile(mut self, profile: FetchProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_roles(mut self, roles: RoleVocabulary) -> Self {
        self.roles = roles;
        self
    }

    pub fn with_expectations(mut self, expectations: RoleExpectations) -> Self {
        self.expectations = expectations;
        self
    }

    pub fn with_failure_budget(mut self, budget: u32) -> Self {
        self.failure_budget = Some(budget);
        self
    }

    /// Absolute URL of a localized page, e.g. `url("ratings")`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            self.locale,
            path.trim_start_matches('/')
        )
    }

    /// Site origin with trailing slash, the landing page.
    pub fn origin(&self) -> String {
        format!("{}/", self.base_url)
    }
}

/// BoxRec account credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Read `BOXREC_USERNAME` / `BOXREC_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let username = env::var("BOXREC_USERNAME").unwrap_or_default();
        let password = env::var("BOXREC_PASSWORD").unwrap_or_default();
        let creds = Self { username, password };
        creds.ensure_present()?;
        Ok(creds)
    }

    pub(crate) fn ensure_present(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(BoxrecError::MissingCredentials);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_localized_urls() {
        let cfg = ClientConfig::new().with_base_url("http://localhost:8080/");
        assert_eq!(cfg.url("ratings"), "http://localhost:8080/en/ratings");
        assert_eq!(cfg.url("/event/1"), "http://localhost:8080/en/event/1");
        assert_eq!(cfg.origin(), "http://localhost:8080/");
    }

    #[test]
    fn default_points_at_boxrec() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.url("search"), "https://boxrec.com/en/search");
        assert_eq!(cfg.failure_budget, None);
    }

    #[test]
    fn missing_credentials_rejected() {
        assert!(matches!(
            Credentials::new("", "pw").ensure_present(),
            Err(BoxrecError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::new("user", "").ensure_present(),
            Err(BoxrecError::MissingCredentials)
        ));
        assert!(Credentials::new("user", "pw").ensure_present().is_ok());
    }

    #[test]
    fn debug_hides_password() {
        let printed = format!("{:?}", Credentials::new("user", "hunter2"));
        assert!(!printed.contains("hunter2"));
    }
}
