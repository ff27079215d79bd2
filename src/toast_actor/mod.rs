//! # Toast Component
//!
//! The notification stack in the corner of every page.
//!
//! ## Structure
//!
//! - [`component`] - [`ToastStack`], the [`Component`](ui_runtime::Component) that owns the list
//! - [`requests`] - [`ToastRequest`] and the internal [`ToastSignal`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Lifecycle of a toast
//!
//! ```text
//! show ──► active (slide-in; success wiggles at +300ms)
//!            │  dismiss / auto-dismiss timer / close button
//!            ▼
//!          leaving (class `removing`, slideOutRight) ──300ms──► node removed
//! ```
//!
//! Every toast has its own timer, cancelled when it is dismissed early. Signals for a toast
//! that is no longer active do nothing, so dismissing twice is the same as dismissing once.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_ui::clients::ToastClient;
//! use cart_ui::config::ToastTimings;
//! use cart_ui::dom::{Dom, MemoryDom};
//! use cart_ui::toast_actor::{self, ToastContext};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dom = Arc::new(MemoryDom::new());
//!     let (actor, client) = toast_actor::new(ToastTimings::default(), 16);
//!     tokio::spawn(actor.run(ToastContext { dom: dom.clone(), container: None }));
//!
//!     let toasts = ToastClient::new(client);
//!     let id = toasts.success("Saved").await.unwrap();
//!     assert_eq!(toasts.active().await.unwrap()[0].id, id);
//!     assert_eq!(dom.find_all_by_class("toast-success").len(), 1);
//! }
//! ```

pub mod component;
pub mod error;
pub mod requests;

pub use component::{ToastContext, ToastStack};
pub use error::ToastError;
pub use requests::{ToastRequest, ToastSignal};

use crate::config::ToastTimings;
use ui_runtime::{ComponentActor, ComponentClient};

/// Creates a new toast actor and its client.
pub fn new(
    timings: ToastTimings,
    buffer_size: usize,
) -> (ComponentActor<ToastStack>, ComponentClient<ToastStack>) {
    ComponentActor::new(ToastStack::new(timings), buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ToastClient;
    use crate::dom::{Dom, MemoryDom};
    use crate::model::Severity;
    use std::sync::Arc;
    use std::time::Duration;

    fn start(dom: &Arc<MemoryDom>) -> ToastClient {
        let (actor, client) = new(ToastTimings::default(), 16);
        tokio::spawn(actor.run(ToastContext {
            dom: dom.clone(),
            container: None,
        }));
        ToastClient::new(client)
    }

    #[tokio::test(start_paused = true)]
    async fn test_markup_and_entrance() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        toasts.error("<script>alert(1)</script>").await.unwrap();

        let node = dom.find_all_by_class("toast")[0];
        assert!(dom.has_class(node, "toast-error"));
        assert!(dom.has_class(node, component::ENTER_CLASS));
        let message = dom.query_class(node, "toast-message").unwrap();
        assert_eq!(dom.text_content(message), "<script>alert(1)</script>");
        assert!(dom.children(message).is_empty());
        let icon = dom.query_class(node, "toast-icon").unwrap();
        assert_eq!(dom.text_content(icon), "✕");
        let close = dom.query_class(node, "toast-close").unwrap();
        assert_eq!(dom.attribute(close, "aria-label").as_deref(), Some("Close"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reuses_registered_container() {
        let dom = Arc::new(MemoryDom::new());
        let existing = dom.element("div", &[component::CONTAINER_CLASS]);
        dom.append_child(dom.body(), existing);

        let (actor, client) = new(ToastTimings::default(), 16);
        tokio::spawn(actor.run(ToastContext {
            dom: dom.clone(),
            container: Some(existing),
        }));
        ToastClient::new(client).info("Hello").await.unwrap();

        assert_eq!(dom.find_all_by_class(component::CONTAINER_CLASS), vec![existing]);
        assert_eq!(dom.children(existing).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_wiggles_after_delay() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        toasts.success("Added").await.unwrap();
        let node = dom.find_all_by_class("toast")[0];
        assert!(!dom.has_class(node, component::WIGGLE_CLASS));

        tokio::time::sleep(Duration::from_millis(310)).await;
        assert!(dom.has_class(node, component::WIGGLE_CLASS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_then_node_removed() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        toasts.info("Heads up").await.unwrap();
        let node = dom.find_all_by_class("toast")[0];

        tokio::time::sleep(Duration::from_millis(3010)).await;
        assert!(toasts.active().await.unwrap().is_empty());
        assert!(dom.has_class(node, component::REMOVING_CLASS));
        assert_eq!(
            dom.style(node, "animation").as_deref(),
            Some(component::EXIT_ANIMATION)
        );
        assert!(dom.contains(node), "node stays for the exit transition");

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!dom.contains(node));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_is_persistent() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        let id = toasts.show("Stay", Severity::Warning, Some(Duration::ZERO)).await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;

        let active = toasts.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);
        assert!(active[0].is_persistent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_twice_equals_once() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        let keep = toasts.info("keep").await.unwrap();
        let gone = toasts.info("gone").await.unwrap();

        assert!(toasts.dismiss(gone).await.unwrap());
        assert!(!toasts.dismiss(gone).await.unwrap());

        let active = toasts.active().await.unwrap();
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![keep]);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(dom.find_all_by_class("toast").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_all_then_show_leaves_one() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        for i in 0..3 {
            toasts.info(format!("toast {i}")).await.unwrap();
        }
        assert_eq!(toasts.dismiss_all().await.unwrap(), 3);
        let fresh = toasts.success("fresh").await.unwrap();

        let active = toasts.active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, fresh);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(dom.find_all_by_class("toast").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_keep_call_order_and_own_timers() {
        let dom = Arc::new(MemoryDom::new());
        let toasts = start(&dom);

        let error = toasts.error("slow").await.unwrap();
        let info = toasts.info("fast").await.unwrap();
        let ids: Vec<_> = toasts.active().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![error, info]);

        // Info expires at 3000ms, error at 4000ms.
        tokio::time::sleep(Duration::from_millis(3100)).await;
        let ids: Vec<_> = toasts.active().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![error]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_removes_visible_and_leaving_toasts() {
        let dom = Arc::new(MemoryDom::new());
        let (actor, client) = new(ToastTimings::default(), 16);
        let handle = tokio::spawn(actor.run(ToastContext {
            dom: dom.clone(),
            container: None,
        }));
        let toasts = ToastClient::new(client);

        toasts.info("visible").await.unwrap();
        let leaving = toasts.info("leaving").await.unwrap();
        assert!(toasts.dismiss(leaving).await.unwrap());
        assert_eq!(dom.find_all_by_class("toast").len(), 2);

        drop(toasts);
        handle.await.unwrap();

        assert!(dom.find_all_by_class("toast").is_empty());
    }
}
