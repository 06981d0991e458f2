//! Header profiles.
//!
//! A profile fixes the User-Agent and the companion headers sent with every
//! BoxRec request, so the site sees one coherent browser for the whole session.
//! `Minimal` sends the User-Agent alone.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchProfile {
    /// Minimal (just User-Agent)
    Minimal,

    /// Chrome on Windows
    Windows,

    /// Safari on macOS
    MacOS,

    /// Safari on iPhone
    IOS,

    /// Chrome on Android
    Android,
}

impl Default for FetchProfile {
    fn default() -> Self {
        Self::Windows
    }
}

impl FetchProfile {
    pub fn user_agent(&self) -> &'static str {
        match self {
            Self::Minimal => "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
            Self::Windows => "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
            Self::MacOS => "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
            Self::IOS => "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
            Self::Android => "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36",
        }
    }
}
