//! Rate limiting for event handlers, on tokio time.
//!
//! ```text
//! calls:     x  x x      x
//! debounce:          ^ (last args, after `wait` of quiet)
//! throttle:  ^          ^ (first call of each window)
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Runs the handler once calls have stopped for `wait`, with the last call's arguments.
pub struct Debouncer<T> {
    wait: Duration,
    handler: Handler<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            handler: Arc::new(handler),
            pending: Mutex::new(None),
        }
    }

    /// Restarts the quiet period. Must be called inside a tokio runtime.
    pub fn call(&self, args: T) {
        let handler = self.handler.clone();
        let wait = self.wait;
        let task = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            handler(args);
        });
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Drops a pending call without running it.
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().unwrap_or_else(PoisonError::into_inner).take() {
            task.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(task) = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner).take() {
            task.abort();
        }
    }
}

/// Runs the handler on the first call, then ignores calls until `wait` has passed.
pub struct Throttle<T> {
    wait: Duration,
    handler: Handler<T>,
    closed_until: Mutex<Option<Instant>>,
}

impl<T> Throttle<T> {
    pub fn new(wait: Duration, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            handler: Arc::new(handler),
            closed_until: Mutex::new(None),
        }
    }

    /// Returns whether the handler ran.
    pub fn call(&self, args: T) -> bool {
        let now = Instant::now();
        {
            let mut closed_until = self
                .closed_until
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if closed_until.is_some_and(|until| now < until) {
                return false;
            }
            *closed_until = Some(now + self.wait);
        }
        (self.handler)(args);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v| sink.lock().unwrap().push(v))
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_once_with_last_args() {
        let (seen, handler) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(300), handler);

        debounced.call(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debounced.call(2);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debounced.call(3);

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(seen.lock().unwrap().is_empty());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(*seen.lock().unwrap(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel() {
        let (seen, handler) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(50), handler);

        debounced.call(1);
        debounced.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_leading_edge() {
        let (seen, handler) = recorder();
        let throttled = Throttle::new(Duration::from_millis(200), handler);

        assert!(throttled.call(1));
        assert!(!throttled.call(2));
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!throttled.call(3));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(throttled.call(4));

        assert_eq!(*seen.lock().unwrap(), vec![1, 4]);
    }
}
