use crate::model::{Severity, ToastEntry, ToastId};
use std::time::Duration;
use ui_runtime::Response;

#[derive(Debug)]
pub enum ToastRequest {
    /// `duration: None` uses the severity's default; `Some(Duration::ZERO)` never expires.
    Show {
        message: String,
        severity: Severity,
        duration: Option<Duration>,
        respond_to: Response<ToastId>,
    },
    /// Replies `true` if the toast was active.
    Dismiss {
        id: ToastId,
        respond_to: Response<bool>,
    },
    /// Replies with how many toasts were dismissed.
    DismissAll { respond_to: Response<usize> },
    Active {
        respond_to: Response<Vec<ToastEntry>>,
    },
}

/// Continuations the toast stack posts to itself.
#[derive(Debug)]
pub enum ToastSignal {
    Wiggle(ToastId),
    Expired(ToastId),
    /// The exit transition is over; the node can go.
    Removed(ToastId),
}
