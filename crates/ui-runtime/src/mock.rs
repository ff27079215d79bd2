//! # Mock Helpers
//!
//! Utilities for testing client wrappers without running a component.
//!
//! ## When to use a mock client vs. a real component
//!
//! | Feature | Mock client | Real component |
//! |---------|-------------|----------------|
//! | **Speed** | Instant | Fast (one spawned task) |
//! | **State** | None, you answer by hand | Real state transitions |
//! | **Use Case** | Does the wrapper send the right request and map the reply? | Does the component behave? |
//! | **Error Injection** | Drop the reply sender to simulate a crash | Requires a real failure |
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use ui_runtime::mock::{create_mock_client, next_request};
//! use ui_runtime::{Component, Mailbox, Response};
//!
//! struct Badge;
//! #[derive(Debug)]
//! enum BadgeRequest { Count { respond_to: Response<u32> } }
//!
//! #[async_trait]
//! impl Component for Badge {
//!     type Request = BadgeRequest;
//!     type Signal = ();
//!     type Context = ();
//!     async fn handle_request(&mut self, _: BadgeRequest, _: &(), _: &Mailbox<()>) {}
//!     async fn handle_signal(&mut self, _: (), _: &(), _: &Mailbox<()>) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Badge>(4);
//!     let task = tokio::spawn(async move {
//!         client.call(|respond_to| BadgeRequest::Count { respond_to }).await
//!     });
//!
//!     match next_request::<Badge>(&mut receiver).await {
//!         Some(BadgeRequest::Count { respond_to }) => respond_to.send(7).unwrap(),
//!         None => panic!("expected a request"),
//!     }
//!     assert_eq!(task.await.unwrap().unwrap(), 7);
//! }
//! ```

use crate::client::ComponentClient;
use crate::component::Component;
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of spawning the component, the test owns the receiving end. It can inspect each
/// request, reply with whatever it wants (or drop the reply sender), and assert on how the
/// wrapper under test handles the outcome.
pub fn create_mock_client<C: Component>(
    buffer_size: usize,
) -> (ComponentClient<C>, mpsc::Receiver<C::Request>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ComponentClient::new(sender), receiver)
}

/// Waits for the next request sent through a mock client.
pub async fn next_request<C: Component>(
    receiver: &mut mpsc::Receiver<C::Request>,
) -> Option<C::Request> {
    receiver.recv().await
}
