use crate::error::{BoxrecError, Result};
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// One profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub person_id: u64,
    /// `None` lets the site pick the person's primary role.
    pub role: Option<Role>,
    pub offset: u32,
    /// Start from the `toggleRatings=y` variant of the page.
    pub toggle_ratings: bool,
}

impl ProfileRequest {
    pub fn new(person_id: u64, role: Option<Role>) -> Self {
        Self {
            person_id,
            role,
            offset: 0,
            toggle_ratings: false,
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_toggle_ratings(mut self, toggle: bool) -> Self {
        self.toggle_ratings = toggle;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.person_id == 0 {
            return Err(BoxrecError::InvalidParams(
                "person id must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// A fetched profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePage {
    pub html: String,
    /// Cells in the first row of the primary data table.
    pub columns: usize,
    /// Role the page was verified against, or the one read from it when no
    /// role was requested.
    pub role: Option<Role>,
}
