use serde::{Deserialize, Serialize};

/// Where to look for the form whose `name` attribute is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormLocator {
    /// The form inside the page's main container (`.page form`).
    PageContainer,
    /// The form sharing a table cell with an `<h2>` containing this text.
    UnderHeading(String),
    /// A form whose `action` attribute contains this fragment.
    ActionContains(String),
}
