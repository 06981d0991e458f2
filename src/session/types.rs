use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Cookies identifying a (usually logged in) BoxRec user.
///
/// Passed by reference to every authenticated call; never stored in a global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    cookies: Vec<Cookie>,
}

impl Session {
    pub fn new(cookies: Vec<Cookie>) -> Self {
        let mut session = Self::default();
        session.merge(cookies);
        session
    }

    /// A session with no cookies.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Add cookies, replacing any with the same name.
    pub fn merge(&mut self, cookies: impl IntoIterator<Item = Cookie>) {
        for cookie in cookies {
            match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
                Some(existing) => existing.value = cookie.value,
                None => self.cookies.push(cookie),
            }
        }
    }

    /// `name=value; name=value`, ready for a `Cookie` header.
    pub fn cookie_header(&self) -> String {
        self.cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
