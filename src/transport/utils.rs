use super::types::{FetchBody, LoginPage, RequestKind};
use crate::error::TransportError;
use crate::session::Cookie;
use reqwest::StatusCode;

const RATE_LIMIT_PATTERNS: [&str; 3] = ["g-recaptcha", "grecaptcha", "too many requests"];

const SUSPICIOUS_PATTERNS: [&str; 9] = [
    "verify you are a human",
    "please complete the captcha",
    "captcha challenge",
    "cf-browser-verification",
    "cf-captcha-container",
    "blocked by cloudflare",
    "please enable javascript and cookies",
    "checking your browser before accessing",
    "bot detection",
];

fn status_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not found",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::INTERNAL_SERVER_ERROR => "server error",
        s if s.is_server_error() => "server error",
        _ => "unknown error",
    }
}

/// Validate an HTML response before anyone parses it.
///
/// 429, and any other error status served with a recaptcha wall, maps to
/// `RateLimited`. Remaining non-2xx statuses map to `Status` and interstitials
/// to `BotChallenge`. A 2xx page may embed a recaptcha widget in its own forms,
/// so its body is only checked for interstitials.
pub(crate) fn validate_response(url: &str, status: u16, body: &str) -> Result<(), TransportError> {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let lower = body.to_ascii_lowercase();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TransportError::RateLimited {
            url: url.to_string(),
        });
    }
    if !status.is_success() {
        if RATE_LIMIT_PATTERNS.iter().any(|p| lower.contains(p)) {
            return Err(TransportError::RateLimited {
                url: url.to_string(),
            });
        }
        return Err(TransportError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            label: status_label(status),
        });
    }

    if let Some(pattern) = SUSPICIOUS_PATTERNS.iter().copied().find(|p| lower.contains(p)) {
        return Err(TransportError::BotChallenge {
            url: url.to_string(),
            pattern,
        });
    }

    Ok(())
}

/// Turn a raw response into the body shape the request asked for.
pub(crate) fn body_for_kind(
    kind: RequestKind,
    url: &str,
    status: u16,
    final_url: String,
    text: String,
) -> Result<FetchBody, TransportError> {
    match kind {
        RequestKind::Html => {
            validate_response(url, status, &text)?;
            Ok(FetchBody::Html(text))
        }
        RequestKind::Json => {
            if !(200..300).contains(&status) {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                return Err(TransportError::Status {
                    url: url.to_string(),
                    status,
                    label: status_label(code),
                });
            }
            serde_json::from_str(&text)
                .map(FetchBody::Json)
                .map_err(|e| TransportError::Decode {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
        }
        // Login pages are inspected by the caller, only a 429 is fatal here
        RequestKind::Login => {
            if status == StatusCode::TOO_MANY_REQUESTS.as_u16() {
                return Err(TransportError::RateLimited {
                    url: url.to_string(),
                });
            }
            Ok(FetchBody::Login(LoginPage {
                html: text,
                final_url,
                status,
            }))
        }
    }
}

/// Parse a `Cookie:` style header (`a=1; b=2`) into cookies.
pub(crate) fn parse_cookie_header(header: &str) -> Vec<Cookie> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Cookie::new(name, value.trim()))
        })
        .collect()
}

/// Append `params` to `url` as a query string.
#[cfg(any(feature = "browser", test))]
pub(crate) fn with_query(url: &str, params: &[(String, String)]) -> Result<String, TransportError> {
    let mut parsed = url::Url::parse(url).map_err(|e| TransportError::Network {
        url: url.to_string(),
        reason: format!("invalid url: {e}"),
    })?;
    if !params.is_empty() {
        parsed.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(parsed.to_string())
}
