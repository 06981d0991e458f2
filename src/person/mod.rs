//! Person resolution
//!
//! Fetches a person's profile for one role, checks that the page really is
//! that role's profile and retries once with `toggleRatings=y` when the
//! primary table comes back with the wrong shape.
//!
//! Each call walks a fixed sequence of steps:
//!
//! ```text
//! Attempt 1 -> Validate -> Evaluate --(expectation met)--> page 1
//!                             |
//!                             +--> Attempt 2 -> Validate -> Pick winner
//! ```
//!
//! With no role the site's quick search picks the profile and the page is
//! returned untouched.

pub mod types;

pub use types::*;

use crate::config::ClientConfig;
use crate::error::{BoxrecError, Result};
use crate::html::{count_primary_table_columns, extract_role};
use crate::role::{ColumnExpectation, Role};
use crate::session::Session;
use crate::transport::{FetchRequest, Transport};
use crate::wrap::{ParamWrapCache, WrapFamily};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, info, warn};

pub struct PersonResolver<'a> {
    transport: &'a dyn Transport,
    wraps: &'a ParamWrapCache,
    config: &'a ClientConfig,
    /// Resolutions whose attempts both missed their expectation.
    failures: &'a AtomicU32,
}

impl<'a> PersonResolver<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        wraps: &'a ParamWrapCache,
        config: &'a ClientConfig,
        failures: &'a AtomicU32,
    ) -> Self {
        Self {
            transport,
            wraps,
            config,
            failures,
        }
    }

    pub async fn resolve(
        &self,
        request: &ProfileRequest,
        session: Option<&Session>,
    ) -> Result<ProfilePage> {
        request.validate()?;
        let Some(role) = request.role else {
            return self.quick_identify(request.person_id, session).await;
        };

        let expectation = self.config.expectations.get(role);
        let first = self.attempt(request, role, request.toggle_ratings, session).await?;
        if expectation.is_met(first.columns) {
            debug!(
                person_id = request.person_id,
                role = %role,
                columns = first.columns,
                "first attempt accepted"
            );
            return Ok(first);
        }

        // A page already fetched with the modifier has nothing left to toggle
        if request.toggle_ratings {
            return self.settle(request, expectation, first);
        }

        debug!(
            person_id = request.person_id,
            role = %role,
            columns = first.columns,
            expected = %expectation,
            "retrying with toggleRatings"
        );
        let second = self.attempt(request, role, true, session).await?;
        let winner = pick_winner(expectation, first, second);
        self.settle(request, expectation, winner)
    }

    /// Let the site pick the role: POST the id to quick search.
    async fn quick_identify(&self, person_id: u64, session: Option<&Session>) -> Result<ProfilePage> {
        let wrap = self
            .wraps
            .resolve(WrapFamily::QuickSearch, self.transport, session, self.config)
            .await?;
        let request = FetchRequest::post(self.config.url("quick_search"))
            .param(&format!("{wrap}[search_text]"), person_id)
            .param(&format!("{wrap}[search_role]"), "");
        let html = self.transport.fetch(request, session).await?.into_text();

        let role = extract_role(&html, &self.config.roles);
        info!(person_id, role = ?role, "identified person through quick search");
        Ok(ProfilePage {
            columns: count_primary_table_columns(&html),
            role,
            html,
        })
    }

    /// Fetch one variant of the profile and make sure it belongs to `role`.
    async fn attempt(
        &self,
        request: &ProfileRequest,
        role: Role,
        toggle_ratings: bool,
        session: Option<&Session>,
    ) -> Result<ProfilePage> {
        let url = self.config.url(&format!(
            "{}/{}",
            self.config.roles.segment(role),
            request.person_id
        ));
        let mut fetch = FetchRequest::get(url).param("offset", request.offset);
        if toggle_ratings {
            fetch = fetch.param("toggleRatings", "y");
        }
        let html = self.transport.fetch(fetch, session).await?.into_text();

        let found = extract_role(&html, &self.config.roles);
        let matches = found
            .map(|found| self.config.roles.equivalent(found, role))
            .unwrap_or(false);
        if !matches {
            warn!(
                person_id = request.person_id,
                requested = %role,
                found = ?found,
                "profile page does not match requested role"
            );
            return Err(BoxrecError::IdentityMismatch {
                person_id: request.person_id,
                requested: role,
                found,
            });
        }

        Ok(ProfilePage {
            columns: count_primary_table_columns(&html),
            role: Some(role),
            html,
        })
    }

    /// Count a miss against the failure budget, if one is configured.
    fn settle(
        &self,
        request: &ProfileRequest,
        expectation: ColumnExpectation,
        page: ProfilePage,
    ) -> Result<ProfilePage> {
        if expectation.is_met(page.columns) {
            return Ok(page);
        }

        warn!(
            person_id = request.person_id,
            columns = page.columns,
            expected = %expectation,
            "no attempt met the column expectation"
        );
        // Misses are only counted against a configured budget.
        let Some(budget) = self.config.failure_budget else {
            return Ok(page);
        };
        let failures = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_add(1)))
            .unwrap_or_else(|n| n)
            .saturating_add(1);
        if failures > budget {
            warn!(person_id = request.person_id, failures, budget, "failure budget exhausted");
            return Err(BoxrecError::ResolutionExhausted {
                person_id: request.person_id,
                expected: expectation.to_string(),
                received: page.columns,
            });
        }
        Ok(page)
    }
}

/// The page meeting the expectation wins, then the richer one; ties go to the retry.
pub(crate) fn pick_winner(
    expectation: ColumnExpectation,
    first: ProfilePage,
    second: ProfilePage,
) -> ProfilePage {
    match (expectation.is_met(first.columns), expectation.is_met(second.columns)) {
        (true, false) => first,
        (false, true) => second,
        _ if first.columns > second.columns => first,
        _ => second,
    }
}
