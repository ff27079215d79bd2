//! A scriptable backend.
//!
//! ```rust
//! use cart_ui::api::{ApiError, CartApi};
//! use cart_ui::model::{CartLine, CartSnapshot};
//! use cart_ui::testing::MockCartApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = MockCartApi::new();
//!     api.expect_fetch()
//!         .return_ok(CartSnapshot::with_items(vec![CartLine::new("Burger", 120.0, 2)], Some(240.0)));
//!     api.expect_fetch().return_err(ApiError::network("offline"));
//!
//!     assert_eq!(api.fetch_cart().await.unwrap().item_count(), 2);
//!     assert!(api.fetch_cart().await.is_err());
//!     api.verify();
//! }
//! ```
//!
//! A [`hold`](ExpectationBuilder::hold) expectation keeps the call pending until the test
//! releases its [`Gate`], which is how tests put a response "in flight" while something else
//! happens.

use crate::api::{ApiError, CartApi, DashboardApi};
use crate::model::{AddToCart, CartSnapshot, DashboardStats};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

enum Reply<T> {
    Ready(Result<T, ApiError>),
    Held(oneshot::Receiver<Result<T, ApiError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ApiError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Held(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(ApiError::network("request abandoned"))),
        }
    }
}

#[derive(Default)]
struct Script {
    fetches: VecDeque<Reply<CartSnapshot>>,
    adds: VecDeque<Reply<String>>,
    removes: VecDeque<Reply<String>>,
    statistics: VecDeque<Reply<DashboardStats>>,
    fallback_cart: Option<CartSnapshot>,
    fetch_calls: usize,
    added: Vec<AddToCart>,
    removed: Vec<u64>,
    statistics_calls: usize,
    unexpected: Vec<&'static str>,
}

fn lock(script: &Mutex<Script>) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock implementation of [`CartApi`] and [`DashboardApi`].
///
/// Each call consumes the oldest expectation of its kind. Calls with no expectation left
/// fail as network errors and make [`verify`](Self::verify) panic. Clones share the script.
#[derive(Clone, Default)]
pub struct MockCartApi {
    script: Arc<Mutex<Script>>,
}

impl MockCartApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        lock(&self.script)
    }

    fn expect<T, F>(&self, queue: F) -> ExpectationBuilder<T>
    where
        T: 'static,
        F: FnOnce(&mut Script) -> &mut VecDeque<Reply<T>> + Send + 'static,
    {
        let script = self.script.clone();
        ExpectationBuilder {
            push: Box::new(move |reply| queue(&mut lock(&script)).push_back(reply)),
        }
    }

    pub fn expect_fetch(&self) -> ExpectationBuilder<CartSnapshot> {
        self.expect(|script| &mut script.fetches)
    }

    pub fn expect_add(&self) -> ExpectationBuilder<String> {
        self.expect(|script| &mut script.adds)
    }

    pub fn expect_remove(&self) -> ExpectationBuilder<String> {
        self.expect(|script| &mut script.removes)
    }

    pub fn expect_statistics(&self) -> ExpectationBuilder<DashboardStats> {
        self.expect(|script| &mut script.statistics)
    }

    /// Answers every fetch that has no queued expectation with `cart`.
    pub fn with_fallback_cart(self, cart: CartSnapshot) -> Self {
        self.lock().fallback_cart = Some(cart);
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.lock().fetch_calls
    }

    pub fn added(&self) -> Vec<AddToCart> {
        self.lock().added.clone()
    }

    pub fn removed(&self) -> Vec<u64> {
        self.lock().removed.clone()
    }

    pub fn statistics_calls(&self) -> usize {
        self.lock().statistics_calls
    }

    /// Panics unless every expectation was consumed and no call went unanswered.
    pub fn verify(&self) {
        let script = self.lock();
        let remaining = script.fetches.len()
            + script.adds.len()
            + script.removes.len()
            + script.statistics.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
        if !script.unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", script.unexpected);
        }
    }
}

#[async_trait]
impl CartApi for MockCartApi {
    async fn fetch_cart(&self) -> Result<CartSnapshot, ApiError> {
        let reply = {
            let mut script = self.lock();
            script.fetch_calls += 1;
            match script.fetches.pop_front() {
                Some(reply) => reply,
                None => match script.fallback_cart.clone() {
                    Some(cart) => Reply::Ready(Ok(cart)),
                    None => {
                        script.unexpected.push("fetch_cart");
                        Reply::Ready(Err(ApiError::network("no expectation for fetch_cart")))
                    }
                },
            }
        };
        reply.resolve().await
    }

    async fn add_item(&self, request: AddToCart) -> Result<String, ApiError> {
        let reply = {
            let mut script = self.lock();
            script.added.push(request);
            script.adds.pop_front().unwrap_or_else(|| {
                script.unexpected.push("add_item");
                Reply::Ready(Err(ApiError::network("no expectation for add_item")))
            })
        };
        reply.resolve().await
    }

    async fn remove_item(&self, cart_item_id: u64) -> Result<String, ApiError> {
        let reply = {
            let mut script = self.lock();
            script.removed.push(cart_item_id);
            script.removes.pop_front().unwrap_or_else(|| {
                script.unexpected.push("remove_item");
                Reply::Ready(Err(ApiError::network("no expectation for remove_item")))
            })
        };
        reply.resolve().await
    }
}

#[async_trait]
impl DashboardApi for MockCartApi {
    async fn fetch_statistics(&self) -> Result<DashboardStats, ApiError> {
        let reply = {
            let mut script = self.lock();
            script.statistics_calls += 1;
            script.statistics.pop_front().unwrap_or_else(|| {
                script.unexpected.push("fetch_statistics");
                Reply::Ready(Err(ApiError::network("no expectation for fetch_statistics")))
            })
        };
        reply.resolve().await
    }
}

/// Builder for one expected call.
pub struct ExpectationBuilder<T> {
    push: Box<dyn FnOnce(Reply<T>) + Send>,
}

impl<T> ExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        (self.push)(Reply::Ready(Ok(value)));
    }

    pub fn return_err(self, error: ApiError) {
        (self.push)(Reply::Ready(Err(error)));
    }

    /// Keeps the call pending until the returned [`Gate`] is released.
    pub fn hold(self) -> Gate<T> {
        let (sender, receiver) = oneshot::channel();
        (self.push)(Reply::Held(receiver));
        Gate { sender }
    }
}

/// Releases a held call.
pub struct Gate<T> {
    sender: oneshot::Sender<Result<T, ApiError>>,
}

impl<T> Gate<T> {
    pub fn release_ok(self, value: T) {
        let _ = self.sender.send(Ok(value));
    }

    pub fn release_err(self, error: ApiError) {
        let _ = self.sender.send(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;

    #[tokio::test]
    async fn test_expectations_are_consumed_in_order() {
        let api = MockCartApi::new();
        api.expect_fetch().return_ok(CartSnapshot::default());
        api.expect_add().return_ok("Item added to cart successfully".to_string());
        api.expect_remove().return_err(ApiError::rejected(404, "Cart item not found"));

        assert!(api.fetch_cart().await.unwrap().is_empty());
        assert!(api
            .add_item(AddToCart {
                menu_item_id: 1,
                quantity: 2
            })
            .await
            .is_ok());
        assert_eq!(
            api.remove_item(5).await.unwrap_err().to_string(),
            "Cart item not found"
        );
        assert_eq!(api.removed(), vec![5]);
        api.verify();
    }

    #[tokio::test]
    async fn test_held_reply_waits_for_gate() {
        let api = MockCartApi::new();
        let gate = api.expect_fetch().hold();

        let pending = tokio::spawn({
            let api = api.clone();
            async move { api.fetch_cart().await }
        });
        tokio::task::yield_now().await;
        assert!(!pending.is_finished());

        gate.release_ok(CartSnapshot::with_items(vec![CartLine::new("Tea", 20.0, 3)], None));
        assert_eq!(pending.await.unwrap().unwrap().item_count(), 3);
    }

    #[tokio::test]
    async fn test_fallback_cart_answers_unscripted_fetches() {
        let api = MockCartApi::new()
            .with_fallback_cart(CartSnapshot::with_items(vec![CartLine::new("Tea", 20.0, 1)], None));

        api.fetch_cart().await.unwrap();
        api.fetch_cart().await.unwrap();
        assert_eq!(api.fetch_calls(), 2);
        api.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected calls")]
    async fn test_verify_reports_unscripted_calls() {
        let api = MockCartApi::new();
        let _ = api.fetch_cart().await;
        api.verify();
    }
}
