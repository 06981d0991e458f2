use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
}

/// What the caller expects back, which decides validation and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Page HTML, validated for status and challenge walls.
    Html,
    /// JSON body.
    Json,
    /// Login exchange; returns HTML, final URL and status without validation.
    Login,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub method: Method,
    /// Query pairs for GET, form fields for POST.
    pub params: Vec<(String, String)>,
    pub kind: RequestKind,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            params: Vec::new(),
            kind: RequestKind::Html,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(url)
        }
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn kind(mut self, kind: RequestKind) -> Self {
        self.kind = kind;
        self
    }

    /// First value sent under `key`.
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPage {
    pub html: String,
    /// URL after redirects.
    pub final_url: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchBody {
    Html(String),
    Json(serde_json::Value),
    Login(LoginPage),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub body: FetchBody,
    /// Cookies the site holds for this origin after the exchange.
    pub cookies: Vec<crate::session::Cookie>,
}

impl FetchResponse {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            body: FetchBody::Html(html.into()),
            cookies: Vec::new(),
        }
    }

    pub fn json(value: serde_json::Value) -> Self {
        Self {
            body: FetchBody::Json(value),
            cookies: Vec::new(),
        }
    }

    pub fn with_cookies(mut self, cookies: Vec<crate::session::Cookie>) -> Self {
        self.cookies = cookies;
        self
    }

    /// Body as text, whatever shape it came back in.
    pub fn into_text(self) -> String {
        match self.body {
            FetchBody::Html(html) => html,
            FetchBody::Login(page) => page.html,
            FetchBody::Json(value) => value.to_string(),
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        match self.body {
            FetchBody::Json(value) => value,
            FetchBody::Html(text) | FetchBody::Login(LoginPage { html: text, .. }) => {
                serde_json::Value::String(text)
            }
        }
    }
}
