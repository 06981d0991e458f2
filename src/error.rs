use crate::role::Role;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoxrecError>;

/// Failures surfaced by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("status {status} ({label}) for {url}")]
    Status {
        url: String,
        status: u16,
        label: &'static str,
    },

    /// HTTP 429 or a recaptcha wall.
    #[error(
        "429 has occurred for {url}. This is because of too many requests to BoxRec too quickly. \
         Open a browser, log in to BoxRec with this account and then resume"
    )]
    RateLimited { url: String },

    #[error("bot challenge detected for {url} ({pattern})")]
    BotChallenge { url: String, pattern: &'static str },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum BoxrecError {
    #[error("Person does not have this role")]
    IdentityMismatch {
        person_id: u64,
        requested: Role,
        found: Option<Role>,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(
        "Cannot find correct number of columns for person {person_id}. Expecting {expected}, \
         Received {received}. Please report this error with the profile id"
    )]
    ResolutionExhausted {
        person_id: u64,
        expected: String,
        received: usize,
    },

    #[error("Username and password are required to log into BoxRec")]
    MissingCredentials,

    #[error("{0}")]
    LoginFailed(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("could not serialize parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BoxrecError {
    pub(crate) fn login(msg: &str) -> Self {
        BoxrecError::LoginFailed(msg.to_string())
    }
}
