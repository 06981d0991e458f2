//! Transport
//!
//! One async seam for every request the client makes. The HTTP transport is
//! the default; a headless browser sits behind the `browser` feature.

mod client;
mod headers;
mod http;
mod profile;
mod tests;
pub mod types;
mod utils;

#[cfg(feature = "browser")]
mod browser;
#[cfg(test)]
pub(crate) mod mock;

pub use http::ReqwestTransport;
pub use profile::FetchProfile;
pub use types::*;

#[cfg(feature = "browser")]
pub use browser::BrowserTransport;

use crate::error::TransportError;
use crate::session::Session;
use async_trait::async_trait;

/// Fetch one page or form exchange from BoxRec.
#[async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &'static str;

    /// Send `request` carrying `session`'s cookies (none when `None`).
    async fn fetch(
        &self,
        request: FetchRequest,
        session: Option<&Session>,
    ) -> Result<FetchResponse, TransportError>;
}
