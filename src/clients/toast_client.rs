//! # Toast Client
//!
//! Provides the page-facing notification API: `success`, `error`, `warning`, `info`, and
//! explicit dismissal. Durations default per severity; the `*_for` variants take one.
use crate::model::{Severity, ToastEntry, ToastId};
use crate::toast_actor::{ToastError, ToastRequest, ToastStack};
use std::time::Duration;
use tracing::{debug, instrument};
use ui_runtime::ComponentClient;

#[derive(Clone)]
pub struct ToastClient {
    inner: ComponentClient<ToastStack>,
}

fn unavailable(e: ui_runtime::RuntimeError) -> ToastError {
    ToastError::ComponentUnavailable(e.to_string())
}

impl ToastClient {
    pub fn new(inner: ComponentClient<ToastStack>) -> Self {
        Self { inner }
    }

    /// Shows a toast. `None` uses the severity's default duration; `Duration::ZERO` keeps
    /// it until dismissed.
    #[instrument(skip(self, message))]
    pub async fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> Result<ToastId, ToastError> {
        let message = message.into();
        debug!(%message, "Sending request");
        self.inner
            .call(|respond_to| ToastRequest::Show {
                message,
                severity,
                duration,
                respond_to,
            })
            .await
            .map_err(unavailable)
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Success, None).await
    }

    pub async fn error(&self, message: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Error, None).await
    }

    pub async fn warning(&self, message: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Warning, None).await
    }

    pub async fn info(&self, message: impl Into<String>) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Info, None).await
    }

    pub async fn success_for(
        &self,
        message: impl Into<String>,
        duration: Duration,
    ) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Success, Some(duration)).await
    }

    pub async fn error_for(
        &self,
        message: impl Into<String>,
        duration: Duration,
    ) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Error, Some(duration)).await
    }

    pub async fn warning_for(
        &self,
        message: impl Into<String>,
        duration: Duration,
    ) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Warning, Some(duration)).await
    }

    pub async fn info_for(
        &self,
        message: impl Into<String>,
        duration: Duration,
    ) -> Result<ToastId, ToastError> {
        self.show(message, Severity::Info, Some(duration)).await
    }

    /// Returns `false` if the toast was not active (unknown or already dismissed).
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: ToastId) -> Result<bool, ToastError> {
        self.inner
            .call(|respond_to| ToastRequest::Dismiss { id, respond_to })
            .await
            .map_err(unavailable)
    }

    #[instrument(skip(self))]
    pub async fn dismiss_all(&self) -> Result<usize, ToastError> {
        self.inner
            .call(|respond_to| ToastRequest::DismissAll { respond_to })
            .await
            .map_err(unavailable)
    }

    /// The active toasts, oldest first.
    pub async fn active(&self) -> Result<Vec<ToastEntry>, ToastError> {
        self.inner
            .call(|respond_to| ToastRequest::Active { respond_to })
            .await
            .map_err(unavailable)
    }
}
