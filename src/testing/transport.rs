use crate::auth::Navigator;
use crate::http::{HttpError, HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Default)]
struct Exchange {
    replies: VecDeque<Result<HttpResponse, String>>,
    requests: Vec<HttpRequest>,
}

/// A [`Transport`] answering from a queue. Clones share the queue and the request log.
///
/// With nothing queued, a request fails as a network error.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<Exchange>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request.
    pub fn respond(&self, response: HttpResponse) {
        self.lock().replies.push_back(Ok(response));
    }

    /// Queues a network failure for the next request.
    pub fn fail(&self, reason: impl Into<String>) {
        self.lock().replies.push_back(Err(reason.into()));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Exchange> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut exchange = self.lock();
        exchange.requests.push(request);
        match exchange.replies.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(HttpError::Transport(reason)),
            None => Err(HttpError::Transport("no response queued".to_string())),
        }
    }
}

/// A [`Navigator`] that only remembers where it was sent.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigating");
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
