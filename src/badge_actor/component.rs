use super::{BadgeRequest, BadgeSignal};
use crate::api::CartApi;
use crate::auth::AuthProvider;
use crate::dom::{Dom, NodeId};
use crate::model::{BadgeState, RefreshOutcome};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use ui_runtime::{Component, Mailbox, Response};

pub const BADGE_CLASS: &str = "cart-badge";
pub const COUNT_CLASS: &str = "cart-badge-count";
pub const POP_CLASS: &str = "animate-badge-pop";

/// Collaborators injected when the badge starts.
pub struct BadgeContext {
    pub dom: Arc<dyn Dom>,
    /// The cart navigation link. Without it the badge does nothing.
    pub anchor: Option<NodeId>,
    pub api: Arc<dyn CartApi>,
    pub auth: Arc<dyn AuthProvider>,
}

/// The item counter on the cart link.
///
/// # Refresh generations
/// Every refresh gets a new generation number. Only the completion carrying the current
/// generation is applied; earlier ones reply [`RefreshOutcome::Stale`]. Callers waiting on
/// a refresh are answered when *their* fetch settles.
pub struct CartBadge {
    pulse_length: Duration,
    state: BadgeState,
    count_node: Option<NodeId>,
    generation: u64,
    waiting: Vec<(u64, Response<RefreshOutcome>)>,
    pulse: u64,
}

impl CartBadge {
    pub fn new(pulse_length: Duration) -> Self {
        Self {
            pulse_length,
            state: BadgeState::default(),
            count_node: None,
            generation: 0,
            waiting: Vec::new(),
            pulse: 0,
        }
    }

    fn bind(&mut self, ctx: &BadgeContext) {
        let dom = ctx.dom.as_ref();
        let Some(anchor) = ctx.anchor.filter(|a| dom.contains(*a)) else {
            warn!("Cart link not found, badge disabled");
            return;
        };
        dom.add_class(anchor, BADGE_CLASS);
        let count = match dom.query_class(anchor, COUNT_CLASS) {
            Some(existing) => existing,
            None => {
                let span = dom.element("span", &[COUNT_CLASS]);
                dom.set_style(span, "display", "none");
                dom.append_child(anchor, span);
                span
            }
        };
        self.count_node = Some(count);
    }

    fn update(&mut self, count: u32, dom: &dyn Dom, mailbox: &Mailbox<BadgeSignal>) -> BadgeState {
        let Some(node) = self.count_node else {
            return self.state;
        };
        self.state = BadgeState::new(count);
        dom.set_text(node, &count.to_string());
        dom.set_style(node, "display", if self.state.visible { "flex" } else { "none" });

        // Restart the pop; only the newest pulse's timer takes the class off again.
        dom.restart_class(node, POP_CLASS);
        self.pulse += 1;
        mailbox.schedule(self.pulse_length, BadgeSignal::PulseEnd { pulse: self.pulse });

        debug!(count, visible = self.state.visible, "Badge updated");
        self.state
    }

    /// Starts a refresh. Returns `Some(outcome)` when it settles immediately.
    fn refresh(&mut self, ctx: &BadgeContext, mailbox: &Mailbox<BadgeSignal>) -> Option<RefreshOutcome> {
        if self.count_node.is_none() || !ctx.auth.current().is_customer() {
            debug!("Refresh skipped");
            return Some(RefreshOutcome::Skipped);
        }

        self.generation += 1;
        let generation = self.generation;
        let api = ctx.api.clone();
        mailbox.spawn(async move {
            let result = api
                .fetch_cart()
                .await
                .map(|cart| cart.item_count())
                .map_err(|e| e.to_string());
            BadgeSignal::Fetched { generation, result }
        });
        debug!(generation, "Refresh started");
        None
    }

    fn settle(&mut self, generation: u64, outcome: RefreshOutcome) {
        let (done, pending) = std::mem::take(&mut self.waiting)
            .into_iter()
            .partition::<Vec<_>, _>(|(g, _)| *g == generation);
        self.waiting = pending;
        for (_, respond_to) in done {
            let _ = respond_to.send(outcome.clone());
        }
    }
}

#[async_trait]
impl Component for CartBadge {
    type Request = BadgeRequest;
    type Signal = BadgeSignal;
    type Context = BadgeContext;

    async fn on_mount(&mut self, ctx: &BadgeContext, mailbox: &Mailbox<BadgeSignal>) {
        self.bind(ctx);
        // Initial count, nobody waits for it.
        self.refresh(ctx, mailbox);
    }

    async fn handle_request(
        &mut self,
        request: BadgeRequest,
        ctx: &BadgeContext,
        mailbox: &Mailbox<BadgeSignal>,
    ) {
        let dom = ctx.dom.as_ref();
        match request {
            BadgeRequest::Refresh { respond_to } => match self.refresh(ctx, mailbox) {
                Some(outcome) => {
                    let _ = respond_to.send(outcome);
                }
                None => self.waiting.push((self.generation, respond_to)),
            },
            BadgeRequest::Update { count, respond_to } => {
                let _ = respond_to.send(self.update(count, dom, mailbox));
            }
            BadgeRequest::Increment { by, respond_to } => {
                let count = self.state.count.saturating_add(by);
                let _ = respond_to.send(self.update(count, dom, mailbox));
            }
            BadgeRequest::Decrement { by, respond_to } => {
                let count = self.state.count.saturating_sub(by);
                let _ = respond_to.send(self.update(count, dom, mailbox));
            }
            BadgeRequest::State { respond_to } => {
                let _ = respond_to.send(self.state);
            }
        }
    }

    async fn handle_signal(
        &mut self,
        signal: BadgeSignal,
        ctx: &BadgeContext,
        mailbox: &Mailbox<BadgeSignal>,
    ) {
        match signal {
            BadgeSignal::Fetched { generation, .. } if generation != self.generation => {
                debug!(generation, current = self.generation, "Discarding stale cart count");
                self.settle(generation, RefreshOutcome::Stale);
            }
            BadgeSignal::Fetched {
                generation,
                result: Ok(count),
            } => {
                self.update(count, ctx.dom.as_ref(), mailbox);
                info!(count, "Cart count refreshed");
                self.settle(generation, RefreshOutcome::Applied(count));
            }
            BadgeSignal::Fetched {
                generation,
                result: Err(reason),
            } => {
                warn!(%reason, "Error fetching cart count");
                self.settle(generation, RefreshOutcome::Failed(reason));
            }
            BadgeSignal::PulseEnd { pulse } => {
                if let (true, Some(node)) = (pulse == self.pulse, self.count_node) {
                    ctx.dom.remove_class(node, POP_CLASS);
                }
            }
        }
    }
}
