use super::{ToastRequest, ToastSignal};
use crate::config::ToastTimings;
use crate::dom::{Dom, NodeId};
use crate::model::{Severity, ToastEntry, ToastId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use ui_runtime::{Component, Mailbox, TimerHandle};

pub const CONTAINER_CLASS: &str = "toast-container";
pub const ENTER_CLASS: &str = "animate-slide-in-bounce";
pub const WIGGLE_CLASS: &str = "animate-wiggle";
pub const REMOVING_CLASS: &str = "removing";
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease-in";

/// Collaborators injected when the toast stack starts.
pub struct ToastContext {
    pub dom: Arc<dyn Dom>,
    /// An existing `div.toast-container`, if the page has one.
    pub container: Option<NodeId>,
}

struct ActiveToast {
    entry: ToastEntry,
    node: NodeId,
    expiry: Option<TimerHandle>,
}

/// The on-screen notification list.
///
/// Toasts render in call order. A dismissed toast leaves the active list at once and its
/// node leaves the document when the exit transition ends.
pub struct ToastStack {
    timings: ToastTimings,
    container: Option<NodeId>,
    next_id: u64,
    active: Vec<ActiveToast>,
    leaving: HashMap<ToastId, NodeId>,
}

impl ToastStack {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            container: None,
            next_id: 0,
            active: Vec::new(),
            leaving: HashMap::new(),
        }
    }

    fn default_duration(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Success => self.timings.success,
            Severity::Error => self.timings.error,
            Severity::Warning => self.timings.warning,
            Severity::Info => self.timings.info,
        }
    }

    fn container(&mut self, dom: &dyn Dom) -> NodeId {
        match self.container {
            Some(node) if dom.contains(node) => node,
            _ => {
                let node = dom.element("div", &[CONTAINER_CLASS]);
                dom.append_child(dom.body(), node);
                self.container = Some(node);
                node
            }
        }
    }

    fn render(&mut self, dom: &dyn Dom, id: ToastId, message: &str, severity: Severity) -> NodeId {
        let container = self.container(dom);
        let variant = format!("toast-{}", severity.css_name());
        let toast = dom.element("div", &["toast", variant.as_str()]);
        dom.set_attribute(toast, "data-toast-id", &id.0.to_string());
        dom.set_attribute(toast, "role", "alert");
        dom.append_text_element(toast, "div", &["toast-icon"], severity.icon());
        dom.append_text_element(toast, "div", &["toast-message"], message);
        let close = dom.append_text_element(toast, "button", &["toast-close"], "×");
        dom.set_attribute(close, "aria-label", "Close");
        dom.set_attribute(close, "data-toast-id", &id.0.to_string());
        dom.append_child(container, toast);
        dom.add_class(toast, ENTER_CLASS);
        toast
    }

    fn show(
        &mut self,
        dom: &dyn Dom,
        mailbox: &Mailbox<ToastSignal>,
        message: String,
        severity: Severity,
        duration: Option<Duration>,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let auto_dismiss = duration.unwrap_or_else(|| self.default_duration(severity));
        let node = self.render(dom, id, &message, severity);

        if severity == Severity::Success {
            mailbox.schedule(self.timings.wiggle_delay, ToastSignal::Wiggle(id));
        }
        let expiry = (!auto_dismiss.is_zero())
            .then(|| mailbox.schedule(auto_dismiss, ToastSignal::Expired(id)));

        info!(toast_id = %id, %severity, ?auto_dismiss, "Toast shown");
        self.active.push(ActiveToast {
            entry: ToastEntry {
                id,
                message,
                severity,
                created_at: Instant::now(),
                auto_dismiss,
            },
            node,
            expiry,
        });
        id
    }

    fn dismiss(&mut self, dom: &dyn Dom, mailbox: &Mailbox<ToastSignal>, id: ToastId) -> bool {
        let Some(index) = self.active.iter().position(|t| t.entry.id == id) else {
            debug!(toast_id = %id, "Toast already gone");
            return false;
        };
        let toast = self.active.remove(index);
        if let Some(expiry) = toast.expiry {
            expiry.cancel();
        }

        dom.add_class(toast.node, REMOVING_CLASS);
        dom.set_style(toast.node, "animation", EXIT_ANIMATION);
        self.leaving.insert(id, toast.node);
        mailbox.schedule(self.timings.exit_transition, ToastSignal::Removed(id));
        info!(toast_id = %id, "Toast dismissed");
        true
    }
}

#[async_trait]
impl Component for ToastStack {
    type Request = ToastRequest;
    type Signal = ToastSignal;
    type Context = ToastContext;

    async fn on_mount(&mut self, ctx: &ToastContext, _mailbox: &Mailbox<ToastSignal>) {
        self.container = ctx.container;
        self.container(ctx.dom.as_ref());
    }

    async fn handle_request(
        &mut self,
        request: ToastRequest,
        ctx: &ToastContext,
        mailbox: &Mailbox<ToastSignal>,
    ) {
        let dom = ctx.dom.as_ref();
        match request {
            ToastRequest::Show {
                message,
                severity,
                duration,
                respond_to,
            } => {
                let _ = respond_to.send(self.show(dom, mailbox, message, severity, duration));
            }
            ToastRequest::Dismiss { id, respond_to } => {
                let _ = respond_to.send(self.dismiss(dom, mailbox, id));
            }
            ToastRequest::DismissAll { respond_to } => {
                let snapshot: Vec<ToastId> = self.active.iter().map(|t| t.entry.id).collect();
                let dismissed = snapshot
                    .into_iter()
                    .filter(|id| self.dismiss(dom, mailbox, *id))
                    .count();
                let _ = respond_to.send(dismissed);
            }
            ToastRequest::Active { respond_to } => {
                let _ = respond_to.send(self.active.iter().map(|t| t.entry.clone()).collect());
            }
        }
    }

    async fn handle_signal(
        &mut self,
        signal: ToastSignal,
        ctx: &ToastContext,
        mailbox: &Mailbox<ToastSignal>,
    ) {
        let dom = ctx.dom.as_ref();
        match signal {
            ToastSignal::Wiggle(id) => {
                if let Some(toast) = self.active.iter().find(|t| t.entry.id == id) {
                    dom.add_class(toast.node, WIGGLE_CLASS);
                }
            }
            ToastSignal::Expired(id) => {
                self.dismiss(dom, mailbox, id);
            }
            ToastSignal::Removed(id) => {
                if let Some(node) = self.leaving.remove(&id) {
                    dom.remove(node);
                    debug!(toast_id = %id, "Toast removed from page");
                }
            }
        }
    }

    async fn on_unmount(&mut self, ctx: &ToastContext) {
        let dom = ctx.dom.as_ref();
        for toast in self.active.drain(..) {
            if let Some(expiry) = toast.expiry {
                expiry.cancel();
            }
            dom.remove(toast.node);
        }
        for (_, node) in self.leaving.drain() {
            dom.remove(node);
        }
    }
}
