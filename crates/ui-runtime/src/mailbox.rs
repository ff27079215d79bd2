//! # Mailbox
//!
//! The component-side handle for continuations. Timers and spawned work never touch
//! component state; they post a signal back into the component's own queue, where it is
//! processed in order with everything else.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Sender half of a component's signal queue.
pub struct Mailbox<S> {
    sender: mpsc::UnboundedSender<S>,
}

impl<S> Clone for Mailbox<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Send + 'static> Mailbox<S> {
    pub(crate) fn new(sender: mpsc::UnboundedSender<S>) -> Self {
        Self { sender }
    }

    /// Posts a signal for immediate processing. Returns `false` if the component is gone.
    pub fn post(&self, signal: S) -> bool {
        self.sender.send(signal).is_ok()
    }

    /// Posts `signal` after `delay`.
    ///
    /// The returned handle cancels the timer if it has not fired yet. Dropping the handle
    /// does *not* cancel it.
    pub fn schedule(&self, delay: Duration, signal: S) -> TimerHandle {
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(signal).is_err() {
                trace!("Timer fired after component unmounted");
            }
        });
        TimerHandle { task }
    }

    /// Runs `work` in the background and posts its output as a signal.
    pub fn spawn<F>(&self, work: F) -> TaskHandle
    where
        F: Future<Output = S> + Send + 'static,
    {
        let sender = self.sender.clone();
        let task = tokio::spawn(async move {
            let signal = work.await;
            if sender.send(signal).is_err() {
                trace!("Background work finished after component unmounted");
            }
        });
        TaskHandle { task }
    }
}

/// Handle to a pending timer created by [`Mailbox::schedule`].
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancels the timer. No-op if it already fired.
    pub fn cancel(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Handle to background work created by [`Mailbox::spawn`].
#[derive(Debug)]
pub struct TaskHandle {
    task: JoinHandle<()>,
}

impl TaskHandle {
    /// Aborts the work. Its signal will never be posted.
    pub fn abort(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
