//! # Component Actor
//!
//! This module defines the `ComponentActor`, the loop that owns a component and feeds it
//! requests and signals one at a time.

use crate::client::ComponentClient;
use crate::component::Component;
use crate::mailbox::Mailbox;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

/// ## ComponentActor
///
/// The `ComponentActor<C>` is the *server* side of a component. It owns the component value,
/// the receiver for caller requests and the receiver for the component's own signals.
///
/// **Concurrency model**: requests and signals are processed strictly one at a time. A
/// handler that needs to wait (a fetch, a delay) hands the wait off through the [`Mailbox`]
/// and returns immediately, so a `close()` can be processed while an `open()` fetch is still
/// in flight.
///
/// **Priority**: pending signals are drained before the next request. A timer that already
/// fired is applied before a request that arrives at the same instant.
///
/// # Usage Pattern
///
/// 1. **Create**: `ComponentActor::new(component, capacity)` returns the actor and a client.
/// 2. **Wire & Run**: spawn `actor.run(context)` with the collaborators injected.
/// 3. **Stop**: drop every client; the loop unmounts the component and returns.
pub struct ComponentActor<C: Component> {
    component: C,
    receiver: mpsc::Receiver<C::Request>,
    signals: mpsc::UnboundedReceiver<C::Signal>,
    mailbox: Mailbox<C::Signal>,
}

impl<C: Component> ComponentActor<C> {
    /// Creates a new `ComponentActor` and its associated `ComponentClient`.
    ///
    /// # Arguments
    ///
    /// * `component` - The initial component state.
    /// * `buffer_size` - Capacity of the request channel. When it is full, callers wait.
    pub fn new(component: C, buffer_size: usize) -> (Self, ComponentClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (signal_sender, signals) = mpsc::unbounded_channel();
        let actor = Self {
            component,
            receiver,
            signals,
            mailbox: Mailbox::new(signal_sender),
        };
        (actor, ComponentClient::new(sender))
    }

    /// Runs the component's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every hook. Collaborators that are created after
    /// the component (clients of other components, for instance) can be wired in here.
    pub async fn run(mut self, context: C::Context) {
        // Extract just the type name (e.g., "ToastStack" instead of "cart_ui::toast::component::ToastStack")
        let component = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(component, "Component mounted");

        let mailbox = self.mailbox.clone();
        self.component.on_mount(&context, &mailbox).await;

        loop {
            tokio::select! {
                biased;
                Some(signal) = self.signals.recv() => {
                    trace!(component, ?signal, "Signal");
                    self.component.handle_signal(signal, &context, &mailbox).await;
                }
                request = self.receiver.recv() => match request {
                    Some(request) => {
                        debug!(component, ?request, "Request");
                        self.component.handle_request(request, &context, &mailbox).await;
                    }
                    None => break,
                },
            }
        }

        self.component.on_unmount(&context).await;
        info!(component, "Component unmounted");
    }
}
