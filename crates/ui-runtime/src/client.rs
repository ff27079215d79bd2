//! # Generic Client
//!
//! This module defines the generic client for sending requests to a component.

use crate::component::Component;
use crate::error::RuntimeError;
use crate::message::Response;
use tokio::sync::{mpsc, oneshot};

/// ## ComponentClient
///
/// The `ComponentClient<C>` is the caller-side handle of a running `ComponentActor<C>`.
/// It forwards requests over a Tokio mpsc channel; replies come back through the oneshot
/// sender embedded in the request.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – [`call`](Self::call) resolves to the reply or a [`RuntimeError`].
/// * **Lifecycle** – the component unmounts once every clone has been dropped.
pub struct ComponentClient<C: Component> {
    sender: mpsc::Sender<C::Request>,
}

impl<C: Component> Clone for ComponentClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> ComponentClient<C> {
    pub fn new(sender: mpsc::Sender<C::Request>) -> Self {
        Self { sender }
    }

    /// Sends a request built around a fresh reply channel and awaits the reply.
    ///
    /// ```rust,ignore
    /// let id = client.call(|respond_to| ToastRequest::Show { message, respond_to }).await?;
    /// ```
    pub async fn call<T, F>(&self, make: F) -> Result<T, RuntimeError>
    where
        F: FnOnce(Response<T>) -> C::Request,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| RuntimeError::ComponentClosed)?;
        response.await.map_err(|_| RuntimeError::ReplyDropped)
    }

    /// Sends a request that carries no reply channel.
    pub async fn send(&self, request: C::Request) -> Result<(), RuntimeError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| RuntimeError::ComponentClosed)
    }

    /// Returns `true` once the component has stopped accepting requests.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
