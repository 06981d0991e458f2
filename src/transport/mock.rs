use super::types::{FetchRequest, FetchResponse};
use super::Transport;
use crate::error::TransportError;
use crate::session::Session;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory transport that replays queued responses in order and records
/// every request it receives.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<FetchResponse, TransportError>>>,
    requests: Mutex<Vec<(FetchRequest, Option<Session>)>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, response: FetchResponse) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn push_html(&self, html: &str) -> &Self {
        self.push(FetchResponse::html(html))
    }

    pub(crate) fn push_error(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<FetchRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(r, _)| r.clone())
            .collect()
    }

    pub(crate) fn sessions(&self) -> Vec<Option<Session>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, s)| s.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(
        &self,
        request: FetchRequest,
        session: Option<&Session>,
    ) -> Result<FetchResponse, TransportError> {
        let url = request.url.clone();
        self.requests
            .lock()
            .unwrap()
            .push((request, session.cloned()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network {
                    url,
                    reason: "no response queued".to_string(),
                })
            })
    }
}
