use crate::html::FormLocator;
use serde::{Deserialize, Serialize};

/// A group of endpoints whose query keys share one form-name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapFamily {
    Search,
    Results,
    Titles,
    Ratings,
    QuickSearch,
}

impl WrapFamily {
    pub const ALL: [WrapFamily; 5] = [
        WrapFamily::Search,
        WrapFamily::Results,
        WrapFamily::Titles,
        WrapFamily::Ratings,
        WrapFamily::QuickSearch,
    ];

    /// Page whose form names the prefix.
    pub fn priming_path(&self) -> &'static str {
        match self {
            Self::Search | Self::QuickSearch => "search",
            Self::Results => "results",
            Self::Titles => "titles",
            Self::Ratings => "ratings",
        }
    }

    pub fn locator(&self) -> FormLocator {
        match self {
            Self::Search => FormLocator::UnderHeading("Find People".to_string()),
            Self::Results | Self::Titles | Self::Ratings => FormLocator::PageContainer,
            Self::QuickSearch => FormLocator::ActionContains("quick_search".to_string()),
        }
    }

    /// Prefix the site has historically used, for when the priming page has no form.
    pub fn default_prefix(&self) -> &'static str {
        match self {
            Self::Search => "pf",
            Self::Results => "c",
            Self::Titles => "WcX",
            Self::Ratings => "r",
            Self::QuickSearch => "qs",
        }
    }
}
