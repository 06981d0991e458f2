//! BoxRec client
//!
//! [`BoxrecClient`] owns the transport, configuration, parameter-wrap cache
//! and failure counter, and exposes one method per site page. Every method
//! returns the page body; parsing it is left to the caller.

mod country;
pub mod types;

pub use types::*;

use crate::config::{ClientConfig, Credentials};
use crate::error::{BoxrecError, Result};
use crate::html::extract_person_ids;
use crate::person::{PersonResolver, ProfilePage, ProfileRequest};
use crate::role::Role;
use crate::session::{self, Session};
use crate::transport::{FetchRequest, ReqwestTransport, Transport};
use crate::wrap::{wrap_params, ParamWrapCache, WrapFamily};
use chrono::NaiveDate;
use futures_util::stream::{self, Stream, StreamExt};
use serde::Serialize;
use std::sync::atomic::AtomicU32;
use std::sync::Arc;
use tracing::debug;

/// BoxRec says two characters, it is actually three.
const MIN_NAME_LEN: usize = 3;
const LOCATION_PREFIX: &str = "l";

#[derive(Clone)]
pub struct BoxrecClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    wraps: Arc<ParamWrapCache>,
    failures: Arc<AtomicU32>,
}

impl BoxrecClient {
    /// Client on the plain HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Client driving a headless Chrome.
    #[cfg(feature = "browser")]
    pub fn with_browser(config: ClientConfig) -> Result<Self> {
        let transport = crate::transport::BrowserTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        debug!(transport = transport.name(), base_url = %config.base_url, "creating client");
        Self {
            transport,
            config: Arc::new(config),
            wraps: Arc::new(ParamWrapCache::new()),
            failures: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Replace the parameter-wrap cache, e.g. with pre-populated tokens.
    pub fn with_wrap_cache(mut self, wraps: ParamWrapCache) -> Self {
        self.wraps = Arc::new(wraps);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn wraps(&self) -> &ParamWrapCache {
        &self.wraps
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        session::login(self.transport.as_ref(), &self.config, credentials).await
    }

    async fn get_page(
        &self,
        session: &Session,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<String> {
        let request = FetchRequest::get(self.config.url(path)).with_params(params);
        Ok(self.transport.fetch(request, Some(session)).await?.into_text())
    }

    async fn get_wrapped<P: Serialize>(
        &self,
        session: &Session,
        family: WrapFamily,
        path: &str,
        params: &P,
        role: Option<&str>,
        offset: u32,
    ) -> Result<String> {
        let wrap = self
            .wraps
            .resolve(family, self.transport.as_ref(), Some(session), &self.config)
            .await?;
        let mut params = wrap_params(&wrap, params, offset)?;
        if let Some(segment) = role {
            insert_role(&mut params, &wrap, segment);
        }
        self.get_page(session, path, params).await
    }

    fn offset(offset: u32) -> Vec<(String, String)> {
        vec![("offset".to_string(), offset.to_string())]
    }

    /// A single bout, `event_bout` being `"{event}/{bout}"`.
    pub async fn get_bout(&self, session: &Session, event_bout: &str) -> Result<String> {
        let event_bout = event_bout.trim_matches('/');
        let valid = event_bout
            .split('/')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
        if !valid || event_bout.split('/').count() != 2 {
            return Err(BoxrecError::InvalidParams(format!(
                "bout id must look like `event/bout`, got `{event_bout}`"
            )));
        }
        self.get_page(session, &format!("event/{event_bout}"), Vec::new())
            .await
    }

    fn boxer_path(&self, id: u64) -> String {
        format!("{}/{id}", self.config.roles.segment(Role::ProBoxer))
    }

    pub async fn get_boxer_pdf(&self, session: &Session, id: u64) -> Result<String> {
        let params = vec![("pdf".to_string(), "y".to_string())];
        self.get_page(session, &self.boxer_path(id), params).await
    }

    pub async fn get_boxer_print(&self, session: &Session, id: u64) -> Result<String> {
        let params = vec![("print".to_string(), "y".to_string())];
        self.get_page(session, &self.boxer_path(id), params).await
    }

    pub async fn get_champions(&self, session: &Session) -> Result<String> {
        self.get_page(session, "champions", Vec::new()).await
    }

    /// Events on one day.
    pub async fn get_date(&self, session: &Session, date: NaiveDate) -> Result<String> {
        let params = vec![("date".to_string(), date.format("%Y-%m-%d").to_string())];
        self.get_page(session, "date", params).await
    }

    pub async fn get_event_by_id(&self, session: &Session, id: u64, offset: u32) -> Result<String> {
        self.get_page(session, &format!("event/{id}"), Self::offset(offset))
            .await
    }

    /// Events by location.
    pub async fn get_events(
        &self,
        session: &Session,
        params: &EventsParams,
        offset: u32,
    ) -> Result<String> {
        let params = wrap_params(LOCATION_PREFIX, params, offset)?;
        self.get_page(session, "locations/event", params).await
    }

    /// People by location.
    pub async fn get_people(
        &self,
        session: &Session,
        params: &PeopleParams,
        offset: u32,
    ) -> Result<String> {
        let role = params.role.map(|r| self.config.roles.segment(r));
        let mut params = wrap_params(LOCATION_PREFIX, params, offset)?;
        if let Some(segment) = role {
            insert_role(&mut params, LOCATION_PREFIX, segment);
        }
        self.get_page(session, "locations/people", params).await
    }

    /// Profile of one person. With no role, the site picks the person's
    /// primary profile.
    pub async fn get_person_by_id(
        &self,
        session: &Session,
        id: u64,
        role: Option<Role>,
        offset: u32,
    ) -> Result<ProfilePage> {
        let request = ProfileRequest::new(id, role).with_offset(offset);
        PersonResolver::new(
            self.transport.as_ref(),
            &self.wraps,
            &self.config,
            &self.failures,
        )
        .resolve(&request, Some(session))
        .await
    }

    /// Search by name, then lazily fetch the profile of every hit.
    ///
    /// Only the search runs up front; each profile is fetched when the stream
    /// is polled for it.
    pub async fn get_people_by_name<'a>(
        &'a self,
        session: &'a Session,
        first_name: &'a str,
        last_name: &'a str,
        role: Option<Role>,
        status: BoxrecStatus,
        offset: u32,
    ) -> Result<impl Stream<Item = Result<ProfilePage>> + 'a> {
        let params = SearchParams::new(first_name, last_name)
            .with_role(role)
            .with_status(status);
        let html = self.search(session, &params, offset).await?;
        let ids = extract_person_ids(&html, &self.config.roles);
        debug!(count = ids.len(), "search returned people");

        Ok(stream::iter(ids).then(move |id| self.get_person_by_id(session, id, role, 0)))
    }

    pub async fn get_ratings(
        &self,
        session: &Session,
        params: &RatingsParams,
        offset: u32,
    ) -> Result<String> {
        self.get_wrapped(session, WrapFamily::Ratings, "ratings", params, None, offset)
            .await
    }

    pub async fn get_results(
        &self,
        session: &Session,
        params: &ResultsParams,
        offset: u32,
    ) -> Result<String> {
        self.get_wrapped(session, WrapFamily::Results, "results", params, None, offset)
            .await
    }

    /// Upcoming events; shares its form prefix with results.
    pub async fn get_schedule(
        &self,
        session: &Session,
        params: &ScheduleParams,
        offset: u32,
    ) -> Result<String> {
        self.get_wrapped(session, WrapFamily::Results, "schedule", params, None, offset)
            .await
    }

    /// Belt history, `title` being e.g. `"6/Middleweight"`.
    pub async fn get_title_by_id(&self, session: &Session, title: &str, offset: u32) -> Result<String> {
        let title = title.trim_matches('/');
        if title.is_empty() {
            return Err(BoxrecError::InvalidParams("title id is empty".to_string()));
        }
        self.get_page(session, &format!("title/{title}"), Self::offset(offset))
            .await
    }

    pub async fn get_titles(
        &self,
        session: &Session,
        params: &TitlesParams,
        offset: u32,
    ) -> Result<String> {
        self.get_wrapped(session, WrapFamily::Titles, "titles", params, None, offset)
            .await
    }

    pub async fn get_venue_by_id(&self, session: &Session, id: u64, offset: u32) -> Result<String> {
        self.get_page(session, &format!("venue/{id}"), Self::offset(offset))
            .await
    }

    /// People the logged in user follows.
    pub async fn get_watched(&self, session: &Session) -> Result<String> {
        self.get_page(session, "my_following", Vec::new()).await
    }

    pub async fn watch(&self, session: &Session, id: u64) -> Result<String> {
        self.get_page(session, &format!("watch/{id}"), Vec::new())
            .await
    }

    pub async fn unwatch(&self, session: &Session, id: u64) -> Result<String> {
        self.get_page(session, &format!("unwatch/{id}"), Vec::new())
            .await
    }

    /// Bouts the logged in user has scored.
    pub async fn list_scores(&self, session: &Session) -> Result<String> {
        self.get_page(session, "my_scores", Vec::new()).await
    }

    pub async fn get_scores_by_bout_id(&self, session: &Session, bout_id: u64) -> Result<String> {
        self.get_page(session, &format!("scoring/{bout_id}"), Vec::new())
            .await
    }

    pub async fn update_score_by_bout_id(
        &self,
        session: &Session,
        bout_id: u64,
        card: &ScoreCard,
    ) -> Result<String> {
        if card.rounds.is_empty() {
            return Err(BoxrecError::InvalidParams(
                "score card has no rounds".to_string(),
            ));
        }
        let request = FetchRequest::post(self.config.url(&format!("scoring/{bout_id}")))
            .with_params(card.to_params());
        Ok(self.transport.fetch(request, Some(session)).await?.into_text())
    }

    /// People search. Needs a first or last name of at least three characters.
    pub async fn search(&self, session: &Session, params: &SearchParams, offset: u32) -> Result<String> {
        let long_enough = |name: &str| name.trim().chars().count() >= MIN_NAME_LEN;
        if !long_enough(&params.first_name) && !long_enough(&params.last_name) {
            return Err(BoxrecError::InvalidParams(
                "Requires `first_name` or `last_name` - minimum 3 characters long".to_string(),
            ));
        }
        let role = params
            .role
            .map(|r| self.config.roles.segment(r))
            .unwrap_or("all");
        self.get_wrapped(session, WrapFamily::Search, "search", params, Some(role), offset)
            .await
    }

    /// The site's search box: jumps to the best match for `text`.
    pub async fn quick_search(
        &self,
        session: &Session,
        text: &str,
        role: Option<Role>,
    ) -> Result<String> {
        let wrap = self
            .wraps
            .resolve(
                WrapFamily::QuickSearch,
                self.transport.as_ref(),
                Some(session),
                &self.config,
            )
            .await?;
        let role = role.map(|r| self.config.roles.segment(r)).unwrap_or("");
        let request = FetchRequest::post(self.config.url("quick_search"))
            .param(&format!("{wrap}[search_text]"), text)
            .param(&format!("{wrap}[search_role]"), role);
        Ok(self.transport.fetch(request, Some(session)).await?.into_text())
    }
}

/// Role segment goes in ahead of the trailing `offset`.
fn insert_role(params: &mut Vec<(String, String)>, prefix: &str, segment: &str) {
    let at = params.len().saturating_sub(1);
    params.insert(at, (format!("{prefix}[role]"), segment.to_string()));
}
