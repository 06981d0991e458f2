//! Session
//!
//! Logging in turns credentials into a [`Session`]: an anonymous cookie from
//! the landing page, then the login form POST, then a check that the site
//! handed back both session cookies.

mod tests;
pub mod types;

pub use types::*;

use crate::config::{ClientConfig, Credentials};
use crate::error::{BoxrecError, Result};
use crate::html::has_login_form;
use crate::transport::{FetchBody, FetchRequest, LoginPage, RequestKind, Transport};
use tracing::{debug, info, warn};

const REQUIRED_COOKIES: [&str; 2] = ["PHPSESSID", "REMEMBERME"];

const GDPR_MESSAGE: &str = "GDPR consent is needed with this account.  Log into BoxRec through their website and accept before using this account";
const CREDENTIALS_MESSAGE: &str = "Please check your credentials, could not log into BoxRec";

/// Log into BoxRec.
pub async fn login(
    transport: &dyn Transport,
    config: &ClientConfig,
    credentials: &Credentials,
) -> Result<Session> {
    credentials.ensure_present()?;

    let landing = transport
        .fetch(
            FetchRequest::get(config.origin()).kind(RequestKind::Login),
            None,
        )
        .await?;
    if landing.cookies.is_empty() {
        return Err(BoxrecError::login(
            "Could not get cookie from initial request to boxrec",
        ));
    }
    let mut session = Session::new(landing.cookies);
    debug!(cookies = session.cookies().len(), "got anonymous session");

    let request = FetchRequest::post(config.url("login"))
        .param("_password", &credentials.password)
        .param("_remember_me", "on")
        .param("_target_path", config.origin())
        .param("_username", &credentials.username)
        .param("login[go]", "")
        .kind(RequestKind::Login);
    let response = transport.fetch(request, Some(&session)).await?;

    let cookies = response.cookies.clone();
    let page = match response.body {
        FetchBody::Login(page) => page,
        FetchBody::Html(html) => LoginPage {
            html,
            final_url: config.url("login"),
            status: 200,
        },
        FetchBody::Json(_) => return Err(BoxrecError::login(CREDENTIALS_MESSAGE)),
    };
    inspect_login_page(&page)?;

    session.merge(cookies);
    let missing: Vec<&str> = REQUIRED_COOKIES
        .iter()
        .copied()
        .filter(|name| session.get(name).is_none())
        .collect();
    if !missing.is_empty() {
        warn!(missing = ?missing, "login response lacked session cookies");
        return Err(BoxrecError::login(CREDENTIALS_MESSAGE));
    }

    info!(username = %credentials.username, "logged into BoxRec");
    Ok(session)
}

/// Map the page BoxRec answered the login POST with to an error, if any.
///
/// A failed login still answers 200, so the body is read for known phrases.
fn inspect_login_page(page: &LoginPage) -> Result<()> {
    let path = url::Url::parse(&page.final_url)
        .map(|u| u.path().to_string())
        .unwrap_or_default();
    if path.contains("gdpr") || page.html.to_lowercase().contains("gdpr") {
        return Err(BoxrecError::login(GDPR_MESSAGE));
    }
    if page.html.contains("your password is incorrect") {
        return Err(BoxrecError::login("Your password is incorrect"));
    }
    if page.html.contains("username does not exist") {
        return Err(BoxrecError::login("Username does not exist"));
    }
    if page.status != 200 || has_login_form(&page.html) {
        return Err(BoxrecError::login(CREDENTIALS_MESSAGE));
    }
    Ok(())
}
